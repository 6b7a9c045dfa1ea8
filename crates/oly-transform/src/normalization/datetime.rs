//! Single-date normalization to `dd-Mon-yyyy`.
//!
//! Raw dates in the biography and games tables come in a handful of shapes:
//!
//! | shape            | example              | result        |
//! |------------------|----------------------|---------------|
//! | `dd-Mon-yy`      | `04-Apr-49`          | `04-Apr-1949` |
//! | `dd-Mon-yyyy`    | `4-apr-1949`         | `04-Apr-1949` |
//! | `dd Month yyyy`  | `24 November 1873`   | `24-Nov-1873` |
//! | `dd Mon yyyy`    | `24 Nov 1873`        | `24-Nov-1873` |
//! | `Month yyyy`     | `July 1882`          | `01-Jul-1882` |
//! | `yyyy`           | `1879`               | `01-Jan-1879` |
//!
//! The shapes are tried in that order and the first one that yields a valid
//! calendar date wins. Tokens follow `strptime` rules: one or two digit days,
//! English month names in any case, and exactly four digit years.

use chrono::NaiveDate;
use tracing::trace;

use oly_model::{
    CanonicalDate, DateError, month_from_abbreviation, month_from_full_name, month_from_name,
};

/// Cell values that mean "no date recorded", compared case-insensitively.
pub const MISSING_VALUE_MARKERS: [&str; 5] = ["unknown", "na", "n/a", "nan", "none"];

/// Largest two-digit year that resolves into the 2000s; anything above is 19xx.
pub const TWO_DIGIT_YEAR_PIVOT: u32 = 22;

type DateRule = fn(&str) -> Option<NaiveDate>;

/// Ordered single-date cascade. Earlier rules take precedence.
const SINGLE_DATE_RULES: [(&str, DateRule); 6] = [
    ("dd-Mon-yy", parse_dashed_two_digit_year),
    ("dd-Mon-yyyy", parse_dashed_four_digit_year),
    ("dd Month yyyy", parse_day_full_month_year),
    ("dd Mon yyyy", parse_day_abbreviated_month_year),
    ("Month yyyy", parse_month_year),
    ("yyyy", parse_year_only),
];

/// Normalizes one raw date.
///
/// `context_year` enables one extra shape after the cascade: a bare
/// `day month` pair such as `6 April`, placed in that year. Games durations
/// rely on it; biography dates pass `None`.
///
/// # Errors
///
/// [`DateError::MissingValue`] for empty cells and missing-value markers,
/// [`DateError::UnrecognizedFormat`] for anything no rule accepts.
///
/// # Examples
///
/// ```
/// use oly_transform::normalization::normalize_single_date;
///
/// let date = normalize_single_date("24 November 1873", None).unwrap();
/// assert_eq!(date.to_string(), "24-Nov-1873");
///
/// let date = normalize_single_date("6 April", Some(1896)).unwrap();
/// assert_eq!(date.to_string(), "06-Apr-1896");
/// ```
pub fn normalize_single_date(
    raw: &str,
    context_year: Option<i32>,
) -> Result<CanonicalDate, DateError> {
    let value = raw.trim();
    if is_missing_value(value) {
        return Err(DateError::MissingValue);
    }

    for (shape, rule) in SINGLE_DATE_RULES {
        if let Some(date) = rule(value) {
            trace!(shape, "date shape matched");
            return Ok(CanonicalDate::new(date));
        }
    }

    if let Some(year) = context_year
        && let Some(date) = parse_day_month_in_year(value, year)
    {
        trace!(shape = "dd Month", year, "date shape matched");
        return Ok(CanonicalDate::new(date));
    }

    Err(DateError::UnrecognizedFormat)
}

/// Returns true for empty cells and missing-value markers.
pub fn is_missing_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || MISSING_VALUE_MARKERS
            .iter()
            .any(|marker| marker.eq_ignore_ascii_case(trimmed))
}

/// Resolves a two-digit year: `00..=22` are 2000s, `23..=99` are 1900s.
pub fn resolve_two_digit_year(two_digits: u32) -> i32 {
    let base = if two_digits <= TWO_DIGIT_YEAR_PIVOT {
        2000
    } else {
        1900
    };
    base + i32::try_from(two_digits % 100).unwrap_or_default()
}

/// Parses `day month` (full or abbreviated month) placed in `year`.
pub(crate) fn parse_day_month_in_year(value: &str, year: i32) -> Option<NaiveDate> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let [day, month] = tokens.as_slice() else {
        return None;
    };
    let day = parse_day(day)?;
    let month = month_from_name(month)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_dashed_two_digit_year(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = resolve_two_digit_year(year.parse().ok()?);
    let day = parse_day(day)?;
    let month = month_from_abbreviation(month)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_dashed_four_digit_year(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    let day = parse_day(day)?;
    let month = month_from_abbreviation(month)?;
    let year = parse_four_digit_year(year)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_day_full_month_year(value: &str) -> Option<NaiveDate> {
    parse_day_named_month_year(value, month_from_full_name)
}

fn parse_day_abbreviated_month_year(value: &str) -> Option<NaiveDate> {
    parse_day_named_month_year(value, month_from_abbreviation)
}

fn parse_day_named_month_year(value: &str, month_of: fn(&str) -> Option<u32>) -> Option<NaiveDate> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let [day, month, year] = tokens.as_slice() else {
        return None;
    };
    let day = parse_day(day)?;
    let month = month_of(month)?;
    let year = parse_four_digit_year(year)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_month_year(value: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let [month, year] = tokens.as_slice() else {
        return None;
    };
    let month = month_from_name(month)?;
    let year = parse_four_digit_year(year)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_year_only(value: &str) -> Option<NaiveDate> {
    let year = parse_four_digit_year(value)?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// One or two ASCII digits in `1..=31`.
fn parse_day(token: &str) -> Option<u32> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u32 = token.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

/// Exactly four ASCII digits; year zero is not a calendar year here.
fn parse_four_digit_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = token.parse().ok()?;
    (year >= 1).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(raw: &str) -> String {
        normalize_single_date(raw, None)
            .map(|date| date.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn two_digit_year_century_split() {
        assert_eq!(resolve_two_digit_year(0), 2000);
        assert_eq!(resolve_two_digit_year(22), 2022);
        assert_eq!(resolve_two_digit_year(23), 1923);
        assert_eq!(resolve_two_digit_year(99), 1999);
    }

    #[test]
    fn dashed_two_digit_year() {
        assert_eq!(normalized("04-Apr-49"), "04-Apr-1949");
        assert_eq!(normalized("4-apr-05"), "04-Apr-2005");
    }

    #[test]
    fn dashed_two_digit_year_needs_abbreviation() {
        assert_eq!(normalized("04-April-49"), "");
    }

    #[test]
    fn dashed_four_digit_year() {
        assert_eq!(normalized("04-Apr-1949"), "04-Apr-1949");
        assert_eq!(normalized("29-Feb-1900"), "");
        assert_eq!(normalized("29-Feb-1904"), "29-Feb-1904");
    }

    #[test]
    fn spaced_shapes() {
        assert_eq!(normalized("24 November 1873"), "24-Nov-1873");
        assert_eq!(normalized("24 Nov 1873"), "24-Nov-1873");
        assert_eq!(normalized("3   may   1901"), "03-May-1901");
        assert_eq!(normalized("Apr 1881"), "01-Apr-1881");
    }

    #[test]
    fn day_rules_follow_strptime() {
        assert_eq!(normalized("0 May 1901"), "");
        assert_eq!(normalized("001 May 1901"), "");
        assert_eq!(normalized("32 May 1901"), "");
        assert_eq!(normalized("31 April 1901"), "");
    }

    #[test]
    fn year_rules() {
        assert_eq!(normalized("0000"), "");
        assert_eq!(normalized("187"), "");
        assert_eq!(normalized("18790"), "");
        assert_eq!(normalized("May 79"), "");
    }

    #[test]
    fn context_year_only_applies_after_cascade() {
        assert_eq!(
            normalize_single_date("6 April", Some(1896)).map(|d| d.to_string()),
            Ok("06-Apr-1896".to_string())
        );
        assert_eq!(
            normalize_single_date("6 April", None),
            Err(DateError::UnrecognizedFormat)
        );
        assert_eq!(
            normalize_single_date("1879", Some(1896)).map(|d| d.to_string()),
            Ok("01-Jan-1879".to_string())
        );
    }

    #[test]
    fn missing_markers() {
        for raw in ["", "  ", "na", "NA", "n/a", "nan", "None", "UNKNOWN"] {
            assert_eq!(normalize_single_date(raw, None), Err(DateError::MissingValue));
        }
        assert_eq!(
            normalize_single_date("circa 1900", None),
            Err(DateError::UnrecognizedFormat)
        );
    }
}
