//! Batch aggregation: one deadline result per entered meeting.

use chrono::NaiveDate;
use tracing::debug;

use themis_calendar::FederalCalendar;

use crate::error::DeadlineError;
use crate::meeting::MeetingRecord;
use crate::policy::Policy;
use crate::status::{classify, Status};
use crate::walk::{compute_deadline, compute_recommended_send};

/// The computed deadlines and status for one meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineResult {
    record: MeetingRecord,
    deadline_date: NaiveDate,
    recommended_send_date: NaiveDate,
    status: Status,
}

impl DeadlineResult {
    /// Returns the meeting this result was computed for.
    pub fn record(&self) -> MeetingRecord {
        self.record
    }

    /// Returns the last business day the notice can be sent.
    pub fn deadline_date(&self) -> NaiveDate {
        self.deadline_date
    }

    /// Returns the deadline minus the publication buffer.
    pub fn recommended_send_date(&self) -> NaiveDate {
        self.recommended_send_date
    }

    /// Returns the status badge for this result.
    pub fn status(&self) -> Status {
        self.status
    }
}

/// Computes a [`DeadlineResult`] for every record, preserving input order.
///
/// The policy is validated once up front. Records are neither deduplicated
/// nor sorted.
///
/// # Errors
///
/// Returns the first [`DeadlineError`] encountered: an invalid policy, a
/// scan that exhausts its budget, or a meeting whose walk leaves the
/// calendar's supported years.
pub fn compute_batch(
    records: &[MeetingRecord],
    policy: &Policy,
    calendar: &FederalCalendar,
    today: NaiveDate,
) -> Result<Vec<DeadlineResult>, DeadlineError> {
    policy.validate()?;
    debug!(n_records = records.len(), %today, "computing batch");
    records
        .iter()
        .map(|record| {
            let deadline_date = compute_deadline(
                calendar,
                record.meeting_date(),
                policy.required_business_days(),
            )?;
            let recommended_send_date =
                compute_recommended_send(deadline_date, policy.publication_buffer_days());
            Ok(DeadlineResult {
                record: *record,
                deadline_date,
                recommended_send_date,
                status: classify(today, deadline_date, recommended_send_date),
            })
        })
        .collect()
}
