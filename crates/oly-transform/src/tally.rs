//! Per-edition medal tally.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::warn;

/// Column order of the tally output.
pub const TALLY_HEADER: [&str; 9] = [
    "edition",
    "edition_id",
    "Country",
    "NOC",
    "number_of_athletes",
    "gold_medal_count",
    "silver_medal_count",
    "bronze_medal_count",
    "total_medals",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Reads a `medal` cell; anything but a medal name is no medal.
    pub fn from_cell(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("gold") => Some(Self::Gold),
            v if v.eq_ignore_ascii_case("silver") => Some(Self::Silver),
            v if v.eq_ignore_ascii_case("bronze") => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// The fields of one event-result row the tally needs.
#[derive(Debug, Clone, Copy)]
pub struct EventEntry<'a> {
    pub edition: &'a str,
    pub edition_id: &'a str,
    pub noc: &'a str,
    pub athlete_id: &'a str,
    pub medal: &'a str,
}

/// One output row of the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    pub edition: String,
    pub edition_id: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    pub number_of_athletes: usize,
    pub gold_medal_count: usize,
    pub silver_medal_count: usize,
    pub bronze_medal_count: usize,
    pub total_medals: usize,
}

/// Numeric edition ids sort numerically and ahead of anything else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct TallyKey {
    edition_order: u64,
    edition_id: String,
}

impl TallyKey {
    fn new(edition_id: &str) -> Self {
        Self {
            edition_order: edition_id.trim().parse().unwrap_or(u64::MAX),
            edition_id: edition_id.trim().to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct TallyGroup {
    edition: String,
    /// NOC of the first row seen for the edition.
    noc: String,
    athletes: BTreeSet<String>,
    gold: usize,
    silver: usize,
    bronze: usize,
}

/// Accumulates event rows into one group per edition.
#[derive(Debug, Default)]
pub struct MedalTally {
    groups: BTreeMap<TallyKey, TallyGroup>,
}

impl MedalTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: &EventEntry<'_>) {
        let group = self
            .groups
            .entry(TallyKey::new(entry.edition_id))
            .or_insert_with(|| TallyGroup {
                edition: entry.edition.trim().to_string(),
                noc: entry.noc.trim().to_string(),
                ..TallyGroup::default()
            });
        let athlete_id = entry.athlete_id.trim();
        if !athlete_id.is_empty() {
            group.athletes.insert(athlete_id.to_string());
        }
        match Medal::from_cell(entry.medal) {
            Some(Medal::Gold) => group.gold += 1,
            Some(Medal::Silver) => group.silver += 1,
            Some(Medal::Bronze) => group.bronze += 1,
            None => {}
        }
    }

    /// Number of editions seen so far.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Finishes the tally, resolving NOC codes to country names.
    ///
    /// Unknown codes get an empty country and one warning each.
    pub fn into_rows(self, countries: &BTreeMap<String, String>) -> Vec<TallyRow> {
        let mut unknown: BTreeSet<String> = BTreeSet::new();
        self.groups
            .into_iter()
            .map(|(key, group)| {
                let country = match countries.get(&group.noc) {
                    Some(name) => name.clone(),
                    None => {
                        if unknown.insert(group.noc.clone()) {
                            warn!(noc = %group.noc, "no country for NOC code");
                        }
                        String::new()
                    }
                };
                TallyRow {
                    edition: group.edition,
                    edition_id: key.edition_id,
                    country,
                    noc: group.noc,
                    number_of_athletes: group.athletes.len(),
                    gold_medal_count: group.gold,
                    silver_medal_count: group.silver,
                    bronze_medal_count: group.bronze,
                    total_medals: group.gold + group.silver + group.bronze,
                }
            })
            .collect()
    }
}
