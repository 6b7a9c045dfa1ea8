//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: locate and read the four source tables
//! 2. **Lookups**: build the games, athlete and country maps
//! 3. **Rewrite**: normalize dates, add ages, write the derived tables
//! 4. **Tally**: count athletes and medals per edition
//!
//! A failing rewrite pass is recorded in the summary and the remaining passes
//! still run. Ingest and lookup failures stop the run.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use oly_ingest::{CsvTable, Lookups, build_lookups, locate_source, read_csv_table};
use oly_model::{PassSummary, PipelineOptions, RunSummary, SourceTable};
use oly_output::{
    Rewrite, build_tally, copy_table, rewrite_bio, rewrite_events_with_age, rewrite_games,
    write_rewrite, write_tally,
};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// The four source tables, loaded.
#[derive(Debug)]
pub struct SourceTables {
    pub bio: CsvTable,
    pub events: CsvTable,
    pub countries: CsvTable,
    pub games: CsvTable,
}

impl SourceTables {
    pub fn get(&self, table: SourceTable) -> &CsvTable {
        match table {
            SourceTable::AthleteBio => &self.bio,
            SourceTable::EventResults => &self.events,
            SourceTable::Countries => &self.countries,
            SourceTable::Games => &self.games,
        }
    }
}

/// Locates and reads every source table in the data directory.
pub fn ingest(options: &PipelineOptions) -> Result<SourceTables> {
    let load = |table: SourceTable| -> Result<CsvTable> {
        let path = locate_source(options.data_dir(), table)
            .with_context(|| format!("locate {} table", table.label()))?;
        read_csv_table(&path).with_context(|| format!("read {} table", table.label()))
    };
    Ok(SourceTables {
        bio: load(SourceTable::AthleteBio)?,
        events: load(SourceTable::EventResults)?,
        countries: load(SourceTable::Countries)?,
        games: load(SourceTable::Games)?,
    })
}

// ============================================================================
// Stage 2: Lookups
// ============================================================================

/// Builds the games, athlete and country maps from the loaded tables.
pub fn load_lookups(sources: &SourceTables) -> Result<Lookups> {
    let start = Instant::now();
    let lookups = build_lookups(&sources.bio, &sources.games, &sources.countries)
        .context("build lookups")?;
    info!(
        games = lookups.games.len(),
        athletes = lookups.athletes.len(),
        countries = lookups.countries.len(),
        duration_ms = start.elapsed().as_millis(),
        "lookups built"
    );
    Ok(lookups)
}

// ============================================================================
// Stage 3: Rewrite
// ============================================================================

/// Rewrites one source table and writes it unless this is a dry run.
pub fn rewrite_pass(
    table: SourceTable,
    sources: &SourceTables,
    lookups: &Lookups,
    options: &PipelineOptions,
) -> Result<PassSummary> {
    let span = info_span!("rewrite", table = table.label());
    let _guard = span.enter();
    let start = Instant::now();
    let source = sources.get(table);
    let rewrite: Rewrite = match table {
        SourceTable::AthleteBio => rewrite_bio(source)?,
        SourceTable::Games => rewrite_games(source)?,
        SourceTable::EventResults => {
            rewrite_events_with_age(source, lookups, &options.age_sentinel)?
        }
        SourceTable::Countries => copy_table(source),
    };
    let summary = write_rewrite(rewrite, table, options)
        .with_context(|| format!("write {} table", table.label()))?;
    info!(
        rows = summary.stats.rows,
        normalized = summary.stats.normalized,
        failed = summary.stats.failed(),
        duration_ms = start.elapsed().as_millis(),
        "rewrite complete"
    );
    Ok(summary)
}

// ============================================================================
// Stage 4: Tally
// ============================================================================

/// Result of the tally stage.
#[derive(Debug, Default)]
pub struct TallyOutcome {
    pub rows: usize,
    /// Written file, `None` on a dry run.
    pub output: Option<PathBuf>,
}

/// Builds the medal tally and writes it unless this is a dry run.
pub fn tally(
    sources: &SourceTables,
    lookups: &Lookups,
    options: &PipelineOptions,
) -> Result<TallyOutcome> {
    let start = Instant::now();
    let rows = build_tally(&sources.events, lookups)?;
    let output = if options.dry_run {
        None
    } else {
        let path = options.tally_path();
        write_tally(&path, &rows)?;
        Some(path)
    };
    info!(
        rows = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "tally complete"
    );
    Ok(TallyOutcome {
        rows: rows.len(),
        output,
    })
}

// ============================================================================
// Full run
// ============================================================================

/// Runs every stage and returns the run summary.
pub fn run_pipeline(options: &PipelineOptions) -> Result<RunSummary> {
    let run_span = info_span!(
        "run",
        data_dir = %options.data_dir.display(),
        dry_run = options.dry_run
    );
    let _run_guard = run_span.enter();

    let ingest_start = Instant::now();
    let sources = info_span!("ingest").in_scope(|| ingest(options))?;
    info!(
        bio_rows = sources.bio.len(),
        event_rows = sources.events.len(),
        country_rows = sources.countries.len(),
        games_rows = sources.games.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let lookups = info_span!("lookups").in_scope(|| load_lookups(&sources))?;

    let mut passes = Vec::new();
    let mut errors = Vec::new();
    for table in SourceTable::ALL {
        match rewrite_pass(table, &sources, &lookups, options) {
            Ok(summary) => passes.push(summary),
            Err(error) => {
                warn!(table = table.label(), error = %format!("{error:#}"), "rewrite failed");
                errors.push(format!("{}: {error:#}", table.label()));
            }
        }
    }

    let outcome = match info_span!("tally").in_scope(|| tally(&sources, &lookups, options)) {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(error = %format!("{error:#}"), "tally failed");
            errors.push(format!("medal tally: {error:#}"));
            TallyOutcome::default()
        }
    };

    Ok(RunSummary {
        data_dir: options.data_dir.clone(),
        output_dir: options.output_dir.clone(),
        dry_run: options.dry_run,
        passes,
        tally_rows: outcome.rows,
        tally_output: outcome.output,
        errors,
    })
}
