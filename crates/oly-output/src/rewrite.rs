//! Row rewriters for the source tables.
//!
//! Rewriters are pure: they take a loaded table and return the derived table
//! together with per-reason counters. [`write_rewrite`] persists the result.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use oly_ingest::{CsvTable, Lookups};
use oly_model::{
    AgeResult, AgeUnavailable, NormalizationStats, PassSummary, PipelineOptions, SourceTable,
    columns,
};
use oly_transform::{
    compute_age_from_raw, edition_year_from_name, normalize_date_range, normalize_edition_name,
    normalize_single_date,
};

use crate::common::write_csv;

/// Reason recorded when a games row has no usable year.
const MISSING_YEAR: &str = "edition year unavailable";

/// A derived table ready to be written.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column whose cells were computed, if any.
    pub column: Option<String>,
    pub stats: NormalizationStats,
}

/// Rewrites the biography `born` column to canonical dates.
///
/// Unparseable values become empty cells.
pub fn rewrite_bio(bio: &CsvTable) -> Result<Rewrite> {
    let born_idx = bio.require_column(columns::BORN)?;
    let mut stats = NormalizationStats::default();
    let mut rows = bio.rows.clone();
    for (row_idx, row) in rows.iter_mut().enumerate() {
        let raw = CsvTable::cell(row, born_idx);
        let rewritten = match normalize_single_date(raw, None) {
            Ok(date) => {
                stats.record_success();
                date.to_string()
            }
            Err(error) => {
                debug!(row = row_idx + 1, value = raw, %error, "birth date not normalized");
                stats.record_failure(error);
                String::new()
            }
        };
        set_cell(row, born_idx, rewritten);
    }
    Ok(Rewrite {
        headers: bio.headers.clone(),
        rows,
        column: Some(bio.headers[born_idx].clone()),
        stats,
    })
}

/// Rewrites the games `competition_date` column to canonical ranges.
///
/// The range is placed in the row's `year`. When that cell is not a number
/// the leading year of the edition name is used instead; with neither the
/// cell becomes empty.
pub fn rewrite_games(games: &CsvTable) -> Result<Rewrite> {
    let date_idx = games.require_column(columns::COMPETITION_DATE)?;
    let year_idx = games.column_index(columns::YEAR);
    let edition_idx = games.column_index(columns::EDITION);
    let mut stats = NormalizationStats::default();
    let mut rows = games.rows.clone();
    for (row_idx, row) in rows.iter_mut().enumerate() {
        let year = year_idx
            .and_then(|idx| CsvTable::cell(row, idx).trim().parse::<i32>().ok())
            .or_else(|| {
                edition_idx.and_then(|idx| {
                    edition_year_from_name(&normalize_edition_name(CsvTable::cell(row, idx)))
                })
            });
        let raw = CsvTable::cell(row, date_idx);
        let rewritten = match year {
            Some(year) => match normalize_date_range(raw, year) {
                Ok(range) => {
                    stats.record_success();
                    range.to_string()
                }
                Err(error) => {
                    debug!(row = row_idx + 1, value = raw, year, %error, "games range not normalized");
                    stats.record_failure(error);
                    String::new()
                }
            },
            None => {
                debug!(row = row_idx + 1, value = raw, "games row has no year");
                stats.record_failure(MISSING_YEAR);
                String::new()
            }
        };
        set_cell(row, date_idx, rewritten);
    }
    Ok(Rewrite {
        headers: games.headers.clone(),
        rows,
        column: Some(games.headers[date_idx].clone()),
        stats,
    })
}

/// Adds the athlete's age at the start of each row's edition.
///
/// An existing `age` column (any case) is overwritten, otherwise one is
/// appended. Rows whose athlete or edition cannot be found get `sentinel`.
pub fn rewrite_events_with_age(
    events: &CsvTable,
    lookups: &Lookups,
    sentinel: &str,
) -> Result<Rewrite> {
    let athlete_idx = events.require_column(columns::ATHLETE_ID)?;
    let edition_idx = events.require_column(columns::EDITION)?;
    let mut headers = events.headers.clone();
    let age_idx = match events.column_index(columns::AGE) {
        Some(idx) => idx,
        None => {
            headers.push(columns::AGE.to_string());
            headers.len() - 1
        }
    };

    let mut unknown_editions: BTreeSet<String> = BTreeSet::new();
    let mut stats = NormalizationStats::default();
    let mut rows = events.rows.clone();
    for (row_idx, row) in rows.iter_mut().enumerate() {
        let edition = CsvTable::cell(row, edition_idx);
        let athlete = lookups.athlete(CsvTable::cell(row, athlete_idx));
        let games = lookups.games_for(edition);
        if games.is_none() && unknown_editions.insert(normalize_edition_name(edition)) {
            warn!(edition, "edition not found in games table");
        }
        let result = match (athlete, games) {
            (Some(athlete), Some(games)) => match games.year {
                Some(year) => compute_age_from_raw(&games.duration, year, &athlete.birth),
                None => AgeResult::Unavailable(AgeUnavailable::UnparseableRange),
            },
            _ => AgeResult::Unavailable(AgeUnavailable::MissingLookup),
        };
        match result {
            AgeResult::Known(_) => stats.record_success(),
            AgeResult::Unavailable(reason) => {
                debug!(row = row_idx + 1, edition, %reason, "age unavailable");
                stats.record_failure(reason);
            }
        }
        set_cell(row, age_idx, result.render(sentinel));
    }
    Ok(Rewrite {
        headers,
        rows,
        column: Some(columns::AGE.to_string()),
        stats,
    })
}

/// Passes a table through unchanged.
pub fn copy_table(table: &CsvTable) -> Rewrite {
    Rewrite {
        headers: table.headers.clone(),
        rows: table.rows.clone(),
        column: None,
        stats: NormalizationStats {
            rows: table.len(),
            ..NormalizationStats::default()
        },
    }
}

/// Writes a rewrite to the output file of `table`, unless this is a dry run.
pub fn write_rewrite(
    rewrite: Rewrite,
    table: SourceTable,
    options: &PipelineOptions,
) -> Result<PassSummary> {
    let output: Option<PathBuf> = if options.dry_run {
        None
    } else {
        let path = options.output_path(table);
        write_csv(&path, &rewrite.headers, &rewrite.rows)?;
        debug!(path = %path.display(), rows = rewrite.rows.len(), "wrote table");
        Some(path)
    };
    Ok(PassSummary {
        table: table.label().to_string(),
        column: rewrite.column,
        output,
        stats: rewrite.stats,
    })
}

fn set_cell(row: &mut Vec<String>, index: usize, value: String) {
    if row.len() <= index {
        row.resize(index + 1, String::new());
    }
    row[index] = value;
}
