//! Olympic records output library.
//!
//! This crate applies the date and age logic to every row of the source
//! tables and persists the derived tables:
//!
//! - **Biography**: `born` rewritten to `dd-Mon-yyyy`
//! - **Games**: `competition_date` rewritten to `dd-Mon-yyyy to dd-Mon-yyyy`
//! - **Event results**: `age` column appended or overwritten
//! - **Countries**: copied through
//! - **Medal tally**: per-edition, per-country counts

mod common;
mod rewrite;
mod tally;

pub use common::{ensure_parent_dir, write_csv};
pub use rewrite::{
    Rewrite, copy_table, rewrite_bio, rewrite_events_with_age, rewrite_games, write_rewrite,
};
pub use tally::{build_tally, write_tally};
