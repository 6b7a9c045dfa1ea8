//! English month names as they appear in the source tables.
//!
//! Matching is ASCII case-insensitive. Full names and three-letter
//! abbreviations are kept apart because the single-date cascade accepts them
//! in different positions.

/// Three-letter abbreviations, indexed by `month - 1`.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn position_of(table: &[&str; 12], token: &str) -> Option<u32> {
    table
        .iter()
        .position(|name| name.eq_ignore_ascii_case(token))
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Month number (1-12) for a full month name such as `November`.
pub fn month_from_full_name(token: &str) -> Option<u32> {
    position_of(&MONTH_NAMES, token)
}

/// Month number (1-12) for a three-letter abbreviation such as `Nov`.
pub fn month_from_abbreviation(token: &str) -> Option<u32> {
    position_of(&MONTH_ABBREVIATIONS, token)
}

/// Month number for either spelling.
pub fn month_from_name(token: &str) -> Option<u32> {
    month_from_full_name(token).or_else(|| month_from_abbreviation(token))
}

/// Three-letter abbreviation for a month number.
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_ABBREVIATIONS.get(index).copied()
}
