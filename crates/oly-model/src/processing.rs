use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;

use serde::Serialize;

/// Per-column counters for a rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    /// Rows seen.
    pub rows: usize,
    /// Rows whose target cell received a computed value.
    pub normalized: usize,
    /// Rows that fell back to the sentinel, by reason.
    pub failures: BTreeMap<String, usize>,
}

impl NormalizationStats {
    pub fn record_success(&mut self) {
        self.rows += 1;
        self.normalized += 1;
    }

    pub fn record_failure(&mut self, reason: impl Display) {
        self.rows += 1;
        *self.failures.entry(reason.to_string()).or_default() += 1;
    }

    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }
}

/// Result of writing one derived table.
#[derive(Debug, Clone, Serialize)]
pub struct PassSummary {
    pub table: String,
    /// Column rewritten by the pass, if any.
    pub column: Option<String>,
    pub output: Option<PathBuf>,
    pub stats: NormalizationStats,
}

/// Result of a whole pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub passes: Vec<PassSummary>,
    pub tally_rows: usize,
    pub tally_output: Option<PathBuf>,
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.passes.iter().map(|pass| pass.stats.rows).sum()
    }
}
