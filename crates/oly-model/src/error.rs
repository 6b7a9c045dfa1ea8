use serde::Serialize;
use thiserror::Error;

/// Why a raw date could not be normalized.
///
/// Writers collapse every variant to an empty output cell; the tag exists so
/// callers and tests can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateError {
    /// Empty input or a missing-value marker such as `unknown` or `n/a`.
    #[error("missing value")]
    MissingValue,
    /// Non-empty input that matches none of the supported shapes.
    #[error("unrecognized date format")]
    UnrecognizedFormat,
    /// Both ends parsed but the end falls before the start.
    #[error("range ends before it starts")]
    ReversedRange,
}

/// Why an age could not be inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeUnavailable {
    /// The birth month slot is empty or does not hold a month name.
    #[error("birth month unknown")]
    UnknownBirthMonth,
    /// Day or year is not numeric, or the triple is not a calendar date.
    #[error("malformed birth date")]
    MalformedBirthDate,
    /// The games duration text could not be normalized.
    #[error("games duration unparseable")]
    UnparseableRange,
    /// No birth record or games record for the row.
    #[error("no matching athlete or edition")]
    MissingLookup,
    /// The arithmetic produced a negative age.
    #[error("negative age")]
    NegativeAge,
}
