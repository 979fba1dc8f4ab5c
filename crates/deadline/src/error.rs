//! Error types for the themis-deadline crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the themis-deadline crate.
///
/// This enum covers policy validation failures, the backward-scan
/// iteration guard, meeting-type parsing, and calendar errors surfaced
/// during the business-day walk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    /// Returned when a policy fails validation.
    #[error("invalid policy: required_business_days must be >= 1 (got {required})")]
    InvalidPolicy {
        /// The rejected business-day count.
        required: u32,
    },

    /// Returned when the backward scan exceeds its iteration budget.
    #[error("business-day scan exceeded {limit} calendar days before {meeting_date}")]
    ScanLimit {
        /// Meeting date the scan started from.
        meeting_date: NaiveDate,
        /// Calendar-day budget that was exhausted.
        limit: u32,
    },

    /// Returned when a meeting-type string cannot be parsed.
    #[error("unknown meeting type: {value:?}")]
    UnknownMeetingType {
        /// The unrecognized input.
        value: String,
    },

    /// Wraps an error originating from the themis-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<themis_calendar::CalendarError> for DeadlineError {
    fn from(e: themis_calendar::CalendarError) -> Self {
        DeadlineError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_policy() {
        let err = DeadlineError::InvalidPolicy { required: 0 };
        assert_eq!(
            err.to_string(),
            "invalid policy: required_business_days must be >= 1 (got 0)"
        );
    }

    #[test]
    fn display_scan_limit() {
        let err = DeadlineError::ScanLimit {
            meeting_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            limit: 44,
        };
        assert_eq!(
            err.to_string(),
            "business-day scan exceeded 44 calendar days before 2025-08-15"
        );
    }

    #[test]
    fn display_unknown_meeting_type() {
        let err = DeadlineError::UnknownMeetingType {
            value: "school board".to_string(),
        };
        assert_eq!(err.to_string(), "unknown meeting type: \"school board\"");
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = themis_calendar::CalendarError::YearOutOfRange {
            year: 1999,
            start: 2020,
            end: 2030,
        };
        let err: DeadlineError = cal_err.into();
        assert!(matches!(err, DeadlineError::Calendar { .. }));
        assert!(err.to_string().contains("1999"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<DeadlineError>();
    }
}
