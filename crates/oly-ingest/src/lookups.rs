//! Lookup tables built once from the source tables and shared read-only.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use oly_model::BirthParts;
use oly_model::columns;
use oly_transform::{edition_year_from_name, normalize_edition_name};

use crate::csv_table::CsvTable;
use crate::error::Result;

/// What the games table says about one edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamesEntry {
    /// Edition name as written in the games table.
    pub edition: String,
    /// Raw `competition_date` text, e.g. `6 – 15 April`.
    pub duration: String,
    /// Four-digit edition year.
    pub year: Option<i32>,
}

/// What the biography table says about one athlete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteRecord {
    /// Day, month and year tokens of the raw `born` cell.
    pub birth: BirthParts,
}

/// Immutable lookups handed to the row rewriters.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    /// Keyed by normalized edition name.
    pub games: BTreeMap<String, GamesEntry>,
    /// Keyed by athlete id.
    pub athletes: BTreeMap<String, AthleteRecord>,
    /// NOC code to country name.
    pub countries: BTreeMap<String, String>,
}

impl Lookups {
    /// Games entry for an edition name in either spelling.
    pub fn games_for(&self, edition: &str) -> Option<&GamesEntry> {
        self.games.get(&normalize_edition_name(edition))
    }

    pub fn athlete(&self, athlete_id: &str) -> Option<&AthleteRecord> {
        self.athletes.get(athlete_id.trim())
    }
}

/// Builds every lookup from the loaded tables.
pub fn build_lookups(bio: &CsvTable, games: &CsvTable, countries: &CsvTable) -> Result<Lookups> {
    Ok(Lookups {
        games: build_games_lookup(games)?,
        athletes: build_athlete_lookup(bio)?,
        countries: build_country_lookup(countries)?,
    })
}

/// Edition name to duration and year. The first row for an edition wins.
pub fn build_games_lookup(games: &CsvTable) -> Result<BTreeMap<String, GamesEntry>> {
    let edition_idx = games.require_column(columns::EDITION)?;
    let duration_idx = games.require_column(columns::COMPETITION_DATE)?;
    let year_idx = games.column_index(columns::YEAR);

    let mut lookup = BTreeMap::new();
    for row in &games.rows {
        let edition = CsvTable::cell(row, edition_idx).trim();
        let key = normalize_edition_name(edition);
        if key.is_empty() {
            continue;
        }
        let year = year_idx
            .and_then(|idx| CsvTable::cell(row, idx).trim().parse().ok())
            .or_else(|| edition_year_from_name(&key));
        if let Entry::Vacant(slot) = lookup.entry(key) {
            slot.insert(GamesEntry {
                edition: edition.to_string(),
                duration: CsvTable::cell(row, duration_idx).to_string(),
                year,
            });
        } else {
            debug!(edition, "duplicate edition in games table");
        }
    }
    Ok(lookup)
}

/// Athlete id to birth-date parts. The first biography row for an id wins.
pub fn build_athlete_lookup(bio: &CsvTable) -> Result<BTreeMap<String, AthleteRecord>> {
    let id_idx = bio.require_column(columns::ATHLETE_ID)?;
    let born_idx = bio.require_column(columns::BORN)?;

    let mut lookup = BTreeMap::new();
    for row in &bio.rows {
        let athlete_id = CsvTable::cell(row, id_idx).trim();
        if athlete_id.is_empty() {
            continue;
        }
        if let Entry::Vacant(slot) = lookup.entry(athlete_id.to_string()) {
            slot.insert(AthleteRecord {
                birth: BirthParts::from_born(CsvTable::cell(row, born_idx)),
            });
        } else {
            debug!(athlete_id, "duplicate athlete in biography table");
        }
    }
    Ok(lookup)
}

/// NOC code to country name.
pub fn build_country_lookup(countries: &CsvTable) -> Result<BTreeMap<String, String>> {
    let noc_idx = countries.require_column(columns::NOC)?;
    let country_idx = countries.require_column(columns::COUNTRY)?;
    let mut lookup = BTreeMap::new();
    for row in &countries.rows {
        let noc = CsvTable::cell(row, noc_idx).trim();
        if noc.is_empty() {
            continue;
        }
        lookup
            .entry(noc.to_string())
            .or_insert_with(|| CsvTable::cell(row, country_idx).trim().to_string());
    }
    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            path: PathBuf::from("test.csv"),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn games_lookup_prefers_year_column() {
        let games = table(
            &["edition", "year", "competition_date"],
            &[
                &["1896 Summer Olympics", "1896", "6 – 15 April"],
                &["1906  Intercalated Games", "", "22 April – 2 May"],
            ],
        );
        let lookup = build_games_lookup(&games).unwrap();
        let summer = lookup.get("1896 Summer").unwrap();
        assert_eq!(summer.year, Some(1896));
        assert_eq!(summer.duration, "6 – 15 April");
        let intercalated = lookup.get("1906 Intercalated").unwrap();
        assert_eq!(intercalated.year, Some(1906));
    }

    #[test]
    fn athlete_lookup_splits_birth_dates() {
        let bio = table(
            &["athlete_id", "name", "born"],
            &[
                &["1", "A", "12 December 1874"],
                &["2", "B", ""],
                &["1", "A again", "1 January 1900"],
            ],
        );
        let lookup = build_athlete_lookup(&bio).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(
            lookup.get("1").unwrap().birth,
            BirthParts::new("12", "December", "1874")
        );
        assert!(lookup.get("2").unwrap().birth.is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let bio = table(&["athlete_id", "name"], &[]);
        let err = build_athlete_lookup(&bio).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required column 'born' not found in test.csv"
        );
    }

    #[test]
    fn lookups_accept_either_edition_spelling() {
        let games = table(
            &["edition", "year", "competition_date"],
            &[&["1896 Summer Olympics", "1896", "6 – 15 April"]],
        );
        let lookups = Lookups {
            games: build_games_lookup(&games).unwrap(),
            ..Lookups::default()
        };
        assert!(lookups.games_for("1896 Summer Olympics").is_some());
        assert!(lookups.games_for("1896 Summer").is_some());
        assert!(lookups.games_for("1900 Summer").is_none());
    }
}
