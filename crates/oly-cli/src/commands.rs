use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::info;

use oly_cli::pipeline::run_pipeline;
use oly_ingest::{count_data_rows, discover_sources};
use oly_model::{PipelineOptions, RunSummary};
use oly_transform::{normalize_date_range, normalize_single_date};

use crate::cli::{NormalizeArgs, RunArgs, SourcesArgs};
use crate::summary::{align_column, apply_table_style, count_cell, dim_cell, header_cell};

pub fn run_pipeline_command(args: &RunArgs) -> Result<RunSummary> {
    let mut options = PipelineOptions::new(&args.data_dir).with_dry_run(args.dry_run);
    if let Some(output_dir) = &args.output_dir {
        options = options.with_output_dir(output_dir);
    }
    if let Some(sentinel) = &args.age_sentinel {
        options = options.with_age_sentinel(sentinel);
    }
    let summary = run_pipeline(&options)?;
    if let Some(path) = &args.summary_json {
        write_summary_json(path, &summary)?;
        info!(path = %path.display(), "wrote summary json");
    }
    Ok(summary)
}

/// Writes the run summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let sources = discover_sources(&args.data_dir)
        .with_context(|| format!("inspect {}", args.data_dir.display()))?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("File"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for source in sources {
        let (file, rows) = match &source.path {
            Some(path) => {
                let rows = count_data_rows(path)
                    .with_context(|| format!("count rows in {}", path.display()))?;
                (
                    comfy_table::Cell::new(path.display()),
                    count_cell(Some(rows), comfy_table::Color::Green),
                )
            }
            None => (
                dim_cell(format!("{} (missing)", source.table.file_name())),
                dim_cell("-"),
            ),
        };
        table.add_row(vec![comfy_table::Cell::new(source.table.label()), file, rows]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let rendered = match args.year {
        Some(year) => normalize_date_range(&args.value, year)
            .map(|range| range.to_string())
            .with_context(|| format!("normalize range {:?} in {year}", args.value))?,
        None => normalize_single_date(&args.value, None)
            .map(|date| date.to_string())
            .with_context(|| format!("normalize date {:?}", args.value))?,
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use oly_ingest::read_csv_table;
    use oly_model::SourceTable;

    use super::*;
    use crate::cli::{Cli, Command};

    fn write_sources(dir: &Path) {
        let files = [
            (
                "olympic_athlete_bio.csv",
                "athlete_id,name,born\n1,Known,1 April 1969\n2,Unknown,\n",
            ),
            (
                "olympic_athlete_event_results.csv",
                "edition,edition_id,country_noc,athlete_id,medal\n\
                 1996 Summer Olympics,24,FRA,1,\n\
                 1996 Summer Olympics,24,FRA,2,\n",
            ),
            (
                "olympics_games.csv",
                "edition,year,competition_date\n1996 Summer Olympics,1996,19 July – 4 August\n",
            ),
            ("olympics_country.csv", "noc,country\nFRA,France\n"),
        ];
        for (name, contents) in files {
            fs::write(dir.join(name), contents).expect("write source");
        }
    }

    fn run_args(argv: &[&str]) -> RunArgs {
        match Cli::try_parse_from(argv).expect("parse args").command {
            Command::Run(args) => args,
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn age_sentinel_flag_fills_unknown_ages() {
        let data = tempfile::tempdir().expect("create data dir");
        write_sources(data.path());
        let data_dir = data.path().to_str().expect("utf-8 path");
        let args = run_args(&["oly", "run", data_dir, "--age-sentinel", "unknown"]);
        assert_eq!(args.age_sentinel.as_deref(), Some("unknown"));

        let summary = run_pipeline_command(&args).expect("run pipeline");
        assert!(!summary.has_errors(), "{:?}", summary.errors);

        let events = read_csv_table(
            &PipelineOptions::new(data.path()).output_path(SourceTable::EventResults),
        )
        .expect("read events output");
        let age = events.column_index("age").expect("age column");
        let ages: Vec<&str> = events.rows.iter().map(|row| row[age].as_str()).collect();
        assert_eq!(ages, vec!["27", "unknown"]);
    }

    #[test]
    fn age_sentinel_flag_is_optional() {
        let args = run_args(&["oly", "run", "data"]);
        assert!(args.age_sentinel.is_none());
    }
}
