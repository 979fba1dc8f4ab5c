//! Backward business-day walk and publication buffer arithmetic.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use themis_calendar::FederalCalendar;

use crate::error::DeadlineError;

/// Calendar-day iteration budget for a backward scan.
///
/// Ten required business days span at most a few weeks even across the
/// winter holiday cluster; a scan that walks three times the requested
/// count plus a two-week slack has hit a defective holiday table.
pub(crate) fn scan_limit(required_business_days: u32) -> u32 {
    required_business_days.saturating_mul(3).saturating_add(14)
}

/// Computes the last day a notice can be sent: the date at which exactly
/// `required_business_days` business days remain strictly before
/// `meeting_date`.
///
/// The walk decrements a cursor one calendar day at a time, counting days
/// that are Monday through Friday and not federal holidays. The meeting
/// date itself is never counted, so a weekend or holiday meeting date
/// changes nothing. The returned date is itself the furthest-back counted
/// business day.
///
/// # Errors
///
/// - [`DeadlineError::InvalidPolicy`] if `required_business_days` is zero.
/// - [`DeadlineError::ScanLimit`] if the walk exhausts its iteration
///   budget (three times the requested count plus two weeks) without
///   counting enough business days.
/// - [`DeadlineError::Calendar`] if the walk leaves the calendar's
///   supported year range.
pub fn compute_deadline(
    calendar: &FederalCalendar,
    meeting_date: NaiveDate,
    required_business_days: u32,
) -> Result<NaiveDate, DeadlineError> {
    if required_business_days == 0 {
        return Err(DeadlineError::InvalidPolicy { required: 0 });
    }
    let limit = scan_limit(required_business_days);
    let mut cursor = meeting_date;
    let mut valid_days = 0u32;
    let mut scanned = 0u32;

    while valid_days < required_business_days {
        cursor = cursor.pred_opt().ok_or_else(|| DeadlineError::Calendar {
            reason: format!("date underflow walking back from {meeting_date}"),
        })?;
        scanned += 1;
        if scanned > limit {
            return Err(DeadlineError::ScanLimit {
                meeting_date,
                limit,
            });
        }
        if calendar.is_business_day(cursor)? {
            valid_days += 1;
        }
    }

    debug!(
        meeting_date = %meeting_date,
        deadline = %cursor,
        scanned,
        "backward scan complete"
    );
    Ok(cursor)
}

/// Subtracts the publication buffer from a deadline.
///
/// Plain calendar-day subtraction: the buffer models newspaper production
/// lead time and deliberately does not skip weekends or holidays.
pub fn compute_recommended_send(deadline_date: NaiveDate, buffer_days: u32) -> NaiveDate {
    deadline_date - Duration::days(i64::from(buffer_days))
}
