//! Normalization of raw date text to canonical `dd-Mon-yyyy` values.
//!
//! - **datetime**: single dates from biography and games cells
//! - **range**: games durations such as `6 – 13 April`

pub mod datetime;
pub mod range;

pub use datetime::{
    MISSING_VALUE_MARKERS, TWO_DIGIT_YEAR_PIVOT, is_missing_value, normalize_single_date,
    resolve_two_digit_year,
};
pub use range::{DASH_GLYPHS, normalize_date_range};
