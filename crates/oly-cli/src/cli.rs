//! CLI argument definitions for the Olympic records cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "oly",
    version,
    about = "Olympic records cleaner - normalize dates, infer ages, tally medals",
    long_about = "Clean historical Olympic record tables.\n\n\
                  Normalizes birth dates and games durations to dd-Mon-yyyy, adds each\n\
                  athlete's age to the event results and writes a per-edition medal tally."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a data folder and write the derived tables.
    Run(RunArgs),

    /// List the expected source files and whether they are present.
    Sources(SourcesArgs),

    /// Normalize a single date, or a games duration when --year is given.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Folder containing the four source CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for derived files (default: <DATA_DIR>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process everything and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Cell text written when an athlete's age cannot be inferred (default: N/A).
    #[arg(long = "age-sentinel", value_name = "TEXT")]
    pub age_sentinel: Option<String>,

    /// Write the run summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SourcesArgs {
    /// Folder to inspect.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw date text, e.g. "24 November 1873" or "6 – 13 April".
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Edition year; treats VALUE as a games duration.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
