//! Olympic records transformation logic.
//!
//! - **normalization**: raw date text to canonical `dd-Mon-yyyy` dates and ranges
//! - **age**: athlete age at the start of a games edition
//! - **edition**: edition-name keys shared by the events and games tables
//! - **tally**: per-edition, per-country athlete and medal counts

pub mod age;
pub mod edition;
pub mod normalization;
pub mod tally;

// Re-export common functions for external use
pub use age::{compute_age, compute_age_from_raw, resolve_birth_date};
pub use edition::{edition_year_from_name, normalize_edition_name};
pub use normalization::{normalize_date_range, normalize_single_date};
pub use tally::{EventEntry, Medal, MedalTally, TALLY_HEADER, TallyRow};
