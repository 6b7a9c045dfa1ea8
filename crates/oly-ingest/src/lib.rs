//! Olympic records ingestion.
//!
//! This crate finds the source tables in a data directory, reads them into
//! memory, and builds the lookup maps the row rewriters join against.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use oly_ingest::{locate_source, read_csv_table};
//! use oly_model::SourceTable;
//!
//! let games = read_csv_table(&locate_source(Path::new("data"), SourceTable::Games)?)?;
//! ```

mod csv_table;
mod discovery;
mod error;
mod lookups;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{CsvTable, count_data_rows, read_csv_table};

// === File Discovery ===
pub use discovery::{DiscoveredSource, discover_sources, list_csv_files, locate_source};

// === Lookups ===
pub use lookups::{
    AthleteRecord, GamesEntry, Lookups, build_athlete_lookup, build_country_lookup,
    build_games_lookup, build_lookups,
};
