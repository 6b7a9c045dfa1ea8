//! Tests for source discovery.

use std::fs;

use oly_ingest::discover_sources;
use oly_model::SourceTable;

#[test]
fn discovers_all_four_sources() {
    let dir = tempfile::tempdir().expect("create temp dir");
    for table in SourceTable::ALL {
        fs::write(dir.path().join(table.file_name()), "a,b\n1,2\n").expect("write file");
    }
    fs::write(dir.path().join("README.csv"), "a\n").expect("write file");

    let sources = discover_sources(dir.path()).expect("discover");
    assert_eq!(sources.len(), 4);
    assert!(sources.iter().all(|source| source.is_present()));
    let games = sources
        .iter()
        .find(|source| source.table == SourceTable::Games)
        .and_then(|source| source.path.as_ref())
        .expect("games path");
    assert!(games.ends_with("olympics_games.csv"));
}
