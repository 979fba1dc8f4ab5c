//! Error types for the themis-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the themis-calendar crate.
///
/// This enum covers construction failures for the precomputed year range
/// and queries that fall outside the range the calendar was built for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a calendar is constructed with a start year after its end year.
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidYearRange {
        /// Requested first supported year.
        start: i32,
        /// Requested last supported year.
        end: i32,
    },

    /// Returned when a queried date falls outside the precomputed year range.
    #[error("year {year} outside supported range {start}..={end}")]
    YearOutOfRange {
        /// Year of the queried date.
        year: i32,
        /// First supported year.
        start: i32,
        /// Last supported year.
        end: i32,
    },

    /// Returned when a range query has its start date after its end date.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Requested range start.
        start: NaiveDate,
        /// Requested range end.
        end: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_invalid_year_range() {
        let err = CalendarError::InvalidYearRange {
            start: 2030,
            end: 2020,
        };
        assert_eq!(
            err.to_string(),
            "invalid year range: start 2030 is after end 2020"
        );
    }

    #[test]
    fn display_year_out_of_range() {
        let err = CalendarError::YearOutOfRange {
            year: 1999,
            start: 2020,
            end: 2030,
        };
        assert_eq!(
            err.to_string(),
            "year 1999 outside supported range 2020..=2030"
        );
    }

    #[test]
    fn display_invalid_date_range() {
        let err = CalendarError::InvalidDateRange {
            start: date(2025, 6, 1),
            end: date(2025, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: 2025-06-01 is after 2025-01-01"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
