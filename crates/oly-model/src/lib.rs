//! Data model for the Olympic records cleaner.
//!
//! - **date**: canonical `dd-Mon-yyyy` dates and inclusive ranges
//! - **birth**: raw birth-date fragments from biography rows
//! - **columns**: column names of the source tables
//! - **age**: age inference outcomes
//! - **error**: typed failure tags for dates and ages
//! - **month**: English month-name lookups
//! - **options**: source/output layout of a pipeline run
//! - **processing**: run and pass summaries

pub mod age;
pub mod birth;
pub mod columns;
pub mod date;
pub mod error;
pub mod month;
pub mod options;
pub mod processing;

pub use age::{AGE_UNAVAILABLE, AgeResult};
pub use birth::BirthParts;
pub use date::{CanonicalDate, DateRange, RANGE_SEPARATOR};
pub use error::{AgeUnavailable, DateError};
pub use month::{month_abbreviation, month_from_abbreviation, month_from_full_name, month_from_name};
pub use options::{MEDAL_TALLY_FILE, PipelineOptions, SourceTable};
pub use processing::{NormalizationStats, PassSummary, RunSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_failures_by_reason() {
        let mut stats = NormalizationStats::default();
        stats.record_success();
        stats.record_failure(DateError::MissingValue);
        stats.record_failure(DateError::MissingValue);
        stats.record_failure(DateError::UnrecognizedFormat);
        assert_eq!(stats.rows, 4);
        assert_eq!(stats.normalized, 1);
        assert_eq!(stats.failed(), 3);
        assert_eq!(stats.failures.get("missing value"), Some(&2));
    }

    #[test]
    fn age_result_rendering() {
        assert_eq!(AgeResult::Known(23).render(AGE_UNAVAILABLE), "23");
        assert_eq!(
            AgeResult::from(AgeUnavailable::UnknownBirthMonth).render(AGE_UNAVAILABLE),
            "N/A"
        );
        assert_eq!(AgeResult::Known(0).age(), Some(0));
    }
}
