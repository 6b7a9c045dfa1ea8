//! Source file discovery.

use std::path::{Path, PathBuf};

use oly_model::SourceTable;

use crate::error::{IngestError, Result};

/// A source table and where it was found, if anywhere.
#[derive(Debug, Clone)]
pub struct DiscoveredSource {
    pub table: SourceTable,
    pub path: Option<PathBuf>,
}

impl DiscoveredSource {
    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Matches each source table to a file in `dir` by name, ignoring case.
pub fn discover_sources(dir: &Path) -> Result<Vec<DiscoveredSource>> {
    let csv_files = list_csv_files(dir)?;
    let discovered = SourceTable::ALL
        .into_iter()
        .map(|table| DiscoveredSource {
            table,
            path: csv_files
                .iter()
                .find(|path| file_name_matches(path, table.file_name()))
                .cloned(),
        })
        .collect();
    Ok(discovered)
}

/// Finds one source table in `dir`.
pub fn locate_source(dir: &Path, table: SourceTable) -> Result<PathBuf> {
    discover_sources(dir)?
        .into_iter()
        .find(|source| source.table == table)
        .and_then(|source| source.path)
        .ok_or_else(|| IngestError::FileNotFound {
            path: dir.join(table.file_name()),
        })
}

fn file_name_matches(path: &Path, expected: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), "header\ndata").unwrap();
        }
        dir
    }

    #[test]
    fn test_list_csv_files_sorted() {
        let dir = create_test_dir(&["b.csv", "a.CSV", "notes.txt"]);
        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }

    #[test]
    fn test_discover_sources_marks_missing_tables() {
        let dir = create_test_dir(&["olympics_games.csv", "OLYMPICS_COUNTRY.csv", "extra.csv"]);
        let sources = discover_sources(dir.path()).unwrap();
        assert_eq!(sources.len(), 4);
        let present: Vec<SourceTable> = sources
            .iter()
            .filter(|source| source.is_present())
            .map(|source| source.table)
            .collect();
        assert_eq!(present, vec![SourceTable::Countries, SourceTable::Games]);
    }

    #[test]
    fn test_locate_source_missing() {
        let dir = create_test_dir(&[]);
        let err = locate_source(dir.path(), SourceTable::AthleteBio).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_directory() {
        let err = list_csv_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
