//! Serde row shapes for the export artifact and batch input files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use themis_deadline::{DeadlineResult, MeetingRecord, MeetingType};

use crate::error::IoError;

/// One row of the exported notice table.
///
/// Column order and names are the export contract:
/// `meeting_type, meeting_date, last_day_to_send_notice,
/// recommended_send_date`. Dates serialize as ISO-8601 and the meeting
/// type as its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRow {
    /// Meeting type display label.
    pub meeting_type: String,
    /// Date of the meeting.
    pub meeting_date: NaiveDate,
    /// Last business day the notice can be sent.
    pub last_day_to_send_notice: NaiveDate,
    /// Deadline minus the publication buffer.
    pub recommended_send_date: NaiveDate,
}

impl From<&DeadlineResult> for NoticeRow {
    fn from(result: &DeadlineResult) -> Self {
        Self {
            meeting_type: result.record().meeting_type().label().to_string(),
            meeting_date: result.record().meeting_date(),
            last_day_to_send_notice: result.deadline_date(),
            recommended_send_date: result.recommended_send_date(),
        }
    }
}

impl NoticeRow {
    /// Parses the meeting-type label back into its enum form.
    pub fn meeting_type(&self) -> Result<MeetingType, IoError> {
        self.meeting_type.parse().map_err(|e| IoError::Parse {
            record: 0,
            reason: format!("{e}"),
        })
    }

    /// Rebuilds the meeting record this row was exported from.
    pub fn to_record(&self) -> Result<MeetingRecord, IoError> {
        Ok(MeetingRecord::new(self.meeting_type()?, self.meeting_date))
    }
}

/// One row of a batch input file: a meeting type and a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    /// Meeting type label or kebab-case token.
    pub meeting_type: String,
    /// Date of the meeting.
    pub meeting_date: NaiveDate,
}

impl BatchRow {
    /// Converts the row into a meeting record.
    ///
    /// `record` is the 1-based data-row number used for error context.
    pub fn to_record(&self, record: usize) -> Result<MeetingRecord, IoError> {
        let meeting_type: MeetingType =
            self.meeting_type.parse().map_err(|e| IoError::Parse {
                record,
                reason: format!("{e}"),
            })?;
        Ok(MeetingRecord::new(meeting_type, self.meeting_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn batch_row_to_record() {
        let row = BatchRow {
            meeting_type: "town-council".to_string(),
            meeting_date: date(2025, 8, 15),
        };
        let record = row.to_record(1).unwrap();
        assert_eq!(record.meeting_type(), MeetingType::TownCouncil);
        assert_eq!(record.meeting_date(), date(2025, 8, 15));
    }

    #[test]
    fn batch_row_accepts_display_label() {
        let row = BatchRow {
            meeting_type: "Planning and Zoning Board".to_string(),
            meeting_date: date(2025, 9, 12),
        };
        assert_eq!(
            row.to_record(1).unwrap().meeting_type(),
            MeetingType::PlanningAndZoning
        );
    }

    #[test]
    fn batch_row_bad_type_reports_record_number() {
        let row = BatchRow {
            meeting_type: "school board".to_string(),
            meeting_date: date(2025, 9, 12),
        };
        let err = row.to_record(4).unwrap_err();
        assert!(matches!(err, IoError::Parse { record: 4, .. }));
        assert!(err.to_string().starts_with("record 4:"));
    }

    #[test]
    fn notice_row_meeting_type_round_trip() {
        let row = NoticeRow {
            meeting_type: "Town Council".to_string(),
            meeting_date: date(2025, 8, 15),
            last_day_to_send_notice: date(2025, 8, 1),
            recommended_send_date: date(2025, 7, 29),
        };
        assert_eq!(row.meeting_type().unwrap(), MeetingType::TownCouncil);
        let record = row.to_record().unwrap();
        assert_eq!(record.meeting_date(), date(2025, 8, 15));
    }
}
