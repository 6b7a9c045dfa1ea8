//! Medal tally building and writing.

use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::debug;

use oly_ingest::{CsvTable, Lookups};
use oly_model::columns;
use oly_transform::{EventEntry, MedalTally, TALLY_HEADER, TallyRow};

use crate::common::ensure_parent_dir;

/// Tallies athletes and medals of the event results per edition.
pub fn build_tally(events: &CsvTable, lookups: &Lookups) -> Result<Vec<TallyRow>> {
    let edition_idx = events.require_column(columns::EDITION)?;
    let edition_id_idx = events.require_column(columns::EDITION_ID)?;
    let noc_idx = events.require_column(columns::COUNTRY_NOC)?;
    let athlete_idx = events.require_column(columns::ATHLETE_ID)?;
    let medal_idx = events.require_column(columns::MEDAL)?;

    let mut tally = MedalTally::new();
    for row in &events.rows {
        tally.record(&EventEntry {
            edition: CsvTable::cell(row, edition_idx),
            edition_id: CsvTable::cell(row, edition_id_idx),
            noc: CsvTable::cell(row, noc_idx),
            athlete_id: CsvTable::cell(row, athlete_idx),
            medal: CsvTable::cell(row, medal_idx),
        });
    }
    debug!(groups = tally.len(), "tally built");
    Ok(tally.into_rows(&lookups.countries))
}

/// Writes the tally. The header is written even when there are no rows.
pub fn write_tally(path: &Path, rows: &[TallyRow]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(TALLY_HEADER)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
