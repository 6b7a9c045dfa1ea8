//! Birth-date fragments taken from a biography `born` cell.

use serde::{Deserialize, Serialize};

/// Day, month and year tokens of a raw birth date, kept as text.
///
/// The split is positional and does not validate anything: `July 1882`
/// yields day `July` and month `1882`, which the age engine later rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthParts {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl BirthParts {
    /// Builds parts from explicit tokens; empty tokens count as absent.
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: non_empty(day.into()),
            month: non_empty(month.into()),
            year: non_empty(year.into()),
        }
    }

    /// Splits a raw `born` value on `-` when it has one, otherwise on whitespace.
    pub fn from_born(raw: &str) -> Self {
        let trimmed = raw.trim();
        let tokens: Vec<&str> = if trimmed.contains('-') {
            trimmed.split('-').collect()
        } else {
            trimmed.split_whitespace().collect()
        };
        let mut tokens = tokens.into_iter().map(str::to_string);
        Self {
            day: tokens.next().and_then(non_empty),
            month: tokens.next().and_then(non_empty),
            year: tokens.next().and_then(non_empty),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dashed_values() {
        let parts = BirthParts::from_born("04-Apr-49");
        assert_eq!(parts, BirthParts::new("04", "Apr", "49"));
    }

    #[test]
    fn splits_spaced_values() {
        let parts = BirthParts::from_born(" 24  November 1873 ");
        assert_eq!(parts, BirthParts::new("24", "November", "1873"));
    }

    #[test]
    fn short_values_leave_slots_empty() {
        let parts = BirthParts::from_born("1879");
        assert_eq!(parts.day.as_deref(), Some("1879"));
        assert!(parts.month.is_none());
        assert!(parts.year.is_none());
        assert!(BirthParts::from_born("").is_empty());
    }
}
