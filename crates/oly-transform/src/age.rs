//! Age of an athlete at the start of a games edition.
//!
//! The age is a day count divided by 365 and floored, not a calendar year
//! difference, so it drifts by a day for every four years of leap days. When
//! the birth date itself lies inside the games range the result is lowered
//! by one. Both rules are kept as they are for output parity.

use std::str::FromStr;

use chrono::NaiveDate;

use oly_model::{AgeResult, AgeUnavailable, BirthParts, DateRange, month_from_name};

use crate::normalization::normalize_date_range;

/// Divisor turning a day count into years.
pub const DAYS_PER_YEAR: i64 = 365;

/// Computes the age at `range.start()` for a birth date given as parts.
///
/// # Examples
///
/// ```
/// use oly_model::{AgeResult, BirthParts};
/// use oly_transform::age::compute_age;
/// use oly_transform::normalization::normalize_date_range;
///
/// let games = normalize_date_range("6 – 15 April", 1896).unwrap();
/// let birth = BirthParts::new("12", "Dec", "1874");
/// assert_eq!(compute_age(&games, &birth), AgeResult::Known(21));
/// ```
pub fn compute_age(range: &DateRange, birth: &BirthParts) -> AgeResult {
    match infer_age(range, birth) {
        Ok(age) => AgeResult::Known(age),
        Err(reason) => AgeResult::Unavailable(reason),
    }
}

/// Normalizes a raw games duration, then computes the age against it.
pub fn compute_age_from_raw(duration: &str, edition_year: i32, birth: &BirthParts) -> AgeResult {
    match normalize_date_range(duration, edition_year) {
        Ok(range) => compute_age(&range, birth),
        Err(_) => AgeResult::Unavailable(AgeUnavailable::UnparseableRange),
    }
}

/// Resolves birth parts into a calendar date.
///
/// Years below 100 are read as 19xx. This differs on purpose from the
/// two-digit rule used for biography dates.
///
/// # Errors
///
/// [`AgeUnavailable::UnknownBirthMonth`] when the month slot does not hold a
/// month name, [`AgeUnavailable::MalformedBirthDate`] for non-numeric day or
/// year and impossible dates.
pub fn resolve_birth_date(birth: &BirthParts) -> Result<NaiveDate, AgeUnavailable> {
    let month = birth
        .month
        .as_deref()
        .and_then(month_from_name)
        .ok_or(AgeUnavailable::UnknownBirthMonth)?;
    let day: u32 = birth
        .day
        .as_deref()
        .and_then(parse_digits)
        .ok_or(AgeUnavailable::MalformedBirthDate)?;
    let mut year: i32 = birth
        .year
        .as_deref()
        .and_then(parse_digits)
        .ok_or(AgeUnavailable::MalformedBirthDate)?;
    if (0..100).contains(&year) {
        year += 1900;
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(AgeUnavailable::MalformedBirthDate)
}

/// ASCII digits only, so signs and other numerals are rejected.
fn parse_digits<T: FromStr>(token: &str) -> Option<T> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn infer_age(range: &DateRange, birth: &BirthParts) -> Result<u32, AgeUnavailable> {
    let born = resolve_birth_date(birth)?;
    let days = (range.start().date() - born).num_days();
    let mut age = days.div_euclid(DAYS_PER_YEAR);
    if range.contains(born) {
        age -= 1;
    }
    u32::try_from(age).map_err(|_| AgeUnavailable::NegativeAge)
}
