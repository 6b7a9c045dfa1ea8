//! Canonical `dd-Mon-yyyy` dates and ranges.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;
use crate::month::{month_abbreviation, month_from_abbreviation};

/// Separator written between the two ends of a rendered range.
pub const RANGE_SEPARATOR: &str = " to ";

/// A calendar date rendered as `dd-Mon-yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its parts, rejecting impossible calendar dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = month_abbreviation(self.0.month()).unwrap_or("???");
        write!(f, "{:02}-{}-{:04}", self.0.day(), month, self.0.year())
    }
}

impl FromStr for CanonicalDate {
    type Err = DateError;

    /// Parses the exact canonical shape only; use the normalizer for raw text.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.trim().split('-');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::UnrecognizedFormat);
        };
        if day.len() != 2 || year.len() != 4 {
            return Err(DateError::UnrecognizedFormat);
        }
        let day: u32 = day.parse().map_err(|_| DateError::UnrecognizedFormat)?;
        let year: i32 = year.parse().map_err(|_| DateError::UnrecognizedFormat)?;
        let month = month_from_abbreviation(month).ok_or(DateError::UnrecognizedFormat)?;
        Self::from_ymd(year, month, day).ok_or(DateError::UnrecognizedFormat)
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The inclusive span of a games edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: CanonicalDate,
    end: CanonicalDate,
}

impl DateRange {
    /// Creates a range, rejecting an end that precedes the start.
    pub fn new(start: CanonicalDate, end: CanonicalDate) -> Result<Self, DateError> {
        if end < start {
            return Err(DateError::ReversedRange);
        }
        Ok(Self { start, end })
    }

    /// A one-day range.
    pub fn single(date: CanonicalDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> CanonicalDate {
        self.start
    }

    pub fn end(&self) -> CanonicalDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.date() <= date && date <= self.end.date()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_day() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}{RANGE_SEPARATOR}{}", self.start, self.end)
        }
    }
}
