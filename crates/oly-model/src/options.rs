//! Pipeline configuration: where the source tables live and where outputs go.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::age::AGE_UNAVAILABLE;

/// File name of the derived medal tally.
pub const MEDAL_TALLY_FILE: &str = "new_medal_tally.csv";

/// The four source tables the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    AthleteBio,
    EventResults,
    Countries,
    Games,
}

impl SourceTable {
    pub const ALL: [SourceTable; 4] = [
        SourceTable::AthleteBio,
        SourceTable::EventResults,
        SourceTable::Countries,
        SourceTable::Games,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::AthleteBio => "olympic_athlete_bio.csv",
            Self::EventResults => "olympic_athlete_event_results.csv",
            Self::Countries => "olympics_country.csv",
            Self::Games => "olympics_games.csv",
        }
    }

    pub fn output_file_name(self) -> &'static str {
        match self {
            Self::AthleteBio => "new_olympic_athlete_bio.csv",
            Self::EventResults => "new_olympic_athlete_event_results.csv",
            Self::Countries => "new_olympics_country.csv",
            Self::Games => "new_olympics_games.csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AthleteBio => "athlete bio",
            Self::EventResults => "event results",
            Self::Countries => "countries",
            Self::Games => "games",
        }
    }
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Directory holding the source CSV files.
    pub data_dir: PathBuf,
    /// Directory the derived CSV files are written to.
    pub output_dir: PathBuf,
    /// Text written into the `age` column when no age can be inferred.
    pub age_sentinel: String,
    /// Process everything but write nothing.
    pub dry_run: bool,
}

impl PipelineOptions {
    /// Outputs land next to the sources unless redirected.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            output_dir: data_dir.clone(),
            data_dir,
            age_sentinel: AGE_UNAVAILABLE.to_string(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_age_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.age_sentinel = sentinel.into();
        self
    }

    pub fn source_path(&self, table: SourceTable) -> PathBuf {
        self.data_dir.join(table.file_name())
    }

    pub fn output_path(&self, table: SourceTable) -> PathBuf {
        self.output_dir.join(table.output_file_name())
    }

    pub fn tally_path(&self) -> PathBuf {
        self.output_dir.join(MEDAL_TALLY_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_default_to_data_dir() {
        let options = PipelineOptions::new("data");
        assert_eq!(
            options.output_path(SourceTable::Games),
            PathBuf::from("data/new_olympics_games.csv")
        );
        assert_eq!(options.tally_path(), PathBuf::from("data/new_medal_tally.csv"));
        assert_eq!(options.age_sentinel, "N/A");
    }

    #[test]
    fn output_dir_override() {
        let options = PipelineOptions::new("data").with_output_dir("out");
        assert_eq!(
            options.source_path(SourceTable::AthleteBio),
            PathBuf::from("data/olympic_athlete_bio.csv")
        );
        assert_eq!(
            options.output_path(SourceTable::AthleteBio),
            PathBuf::from("out/new_olympic_athlete_bio.csv")
        );
    }
}
