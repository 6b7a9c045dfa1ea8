//! Games duration normalization.
//!
//! Durations are written without a year (`6 – 13 April`,
//! `14 May – 28 October`) and use whatever dash glyph the source had. The
//! edition year is supplied separately.

use tracing::trace;

use oly_model::{DateError, DateRange};

use super::datetime::{normalize_single_date, parse_day_month_in_year};

/// Glyphs treated as a range separator: en dash, em dash, minus sign, hyphen.
pub const DASH_GLYPHS: [char; 4] = ['\u{2013}', '\u{2014}', '\u{2212}', '-'];

const SEPARATOR_TOKEN: &str = "to";

/// Normalizes a games duration into an inclusive range within `context_year`.
///
/// Without a separator the whole text is a single date and becomes a
/// one-day range. When the start side is a bare day and the end side is
/// `day month`, the start borrows the end's month.
///
/// # Errors
///
/// [`DateError::MissingValue`] for empty text or a lone dash,
/// [`DateError::UnrecognizedFormat`] when either side fails to parse, and
/// [`DateError::ReversedRange`] when the end precedes the start.
///
/// # Examples
///
/// ```
/// use oly_transform::normalization::normalize_date_range;
///
/// let range = normalize_date_range("6 – 13 April", 1896).unwrap();
/// assert_eq!(range.to_string(), "06-Apr-1896 to 13-Apr-1896");
/// ```
pub fn normalize_date_range(raw: &str, context_year: i32) -> Result<DateRange, DateError> {
    let spaced = replace_dashes(raw.trim());
    let tokens: Vec<&str> = spaced.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(DateError::MissingValue);
    }

    let Some(split_at) = tokens.iter().position(|token| *token == SEPARATOR_TOKEN) else {
        let date = normalize_single_date(&tokens.join(" "), Some(context_year))?;
        return Ok(DateRange::single(date));
    };

    let start_tokens = &tokens[..split_at];
    let end_tokens = &tokens[split_at + 1..];
    if start_tokens.is_empty() && end_tokens.is_empty() {
        return Err(DateError::MissingValue);
    }

    let mut start_text = start_tokens.join(" ");
    let end_text = end_tokens.join(" ");
    if let ([_], [_, month]) = (start_tokens, end_tokens) {
        trace!(month, "start of range borrows month from end");
        start_text.push(' ');
        start_text.push_str(month);
    }

    let start =
        parse_day_month_in_year(&start_text, context_year).ok_or(DateError::UnrecognizedFormat)?;
    let end =
        parse_day_month_in_year(&end_text, context_year).ok_or(DateError::UnrecognizedFormat)?;
    DateRange::new(start.into(), end.into())
}

fn replace_dashes(value: &str) -> String {
    let mut spaced = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        if DASH_GLYPHS.contains(&ch) {
            spaced.push(' ');
            spaced.push_str(SEPARATOR_TOKEN);
            spaced.push(' ');
        } else {
            spaced.push(ch);
        }
    }
    spaced
}
