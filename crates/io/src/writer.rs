//! CSV export of computed deadline batches.

use std::io::Write;
use std::path::Path;

use tracing::info;

use themis_deadline::DeadlineResult;

use crate::error::IoError;
use crate::row::NoticeRow;

/// Header of the exported notice table, in column order.
pub const NOTICE_HEADER: [&str; 4] = [
    "meeting_type",
    "meeting_date",
    "last_day_to_send_notice",
    "recommended_send_date",
];

/// Writes the notice table for a batch to any [`Write`] sink.
///
/// Emits the header row followed by one data row per result, in input
/// order. An empty batch produces a header-only table. See [`NoticeRow`]
/// for the column contract.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] if serialization or the
/// underlying sink fails.
pub fn write_notice_csv<W: Write>(sink: W, results: &[DeadlineResult]) -> Result<(), IoError> {
    // Header is written explicitly so that an empty batch still produces
    // a well-formed table.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(NOTICE_HEADER)?;
    for result in results {
        writer.serialize(NoticeRow::from(result))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the notice table for a batch to a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created, or
/// [`IoError::Csv`] if writing fails.
pub fn export_notice_csv(path: &Path, results: &[DeadlineResult]) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    write_notice_csv(file, results)?;
    info!(path = %path.display(), n_rows = results.len(), "notice table written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use themis_calendar::FederalCalendar;
    use themis_deadline::{compute_batch, MeetingRecord, MeetingType, Policy};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_results() -> Vec<DeadlineResult> {
        let cal = FederalCalendar::new(2025, 2025).unwrap();
        let records = [
            MeetingRecord::new(MeetingType::TownCouncil, date(2025, 8, 15)),
            MeetingRecord::new(MeetingType::PlanningAndZoning, date(2025, 9, 12)),
        ];
        compute_batch(&records, &Policy::default(), &cal, date(2025, 7, 1)).unwrap()
    }

    #[test]
    fn header_and_rows() {
        let mut buf = Vec::new();
        write_notice_csv(&mut buf, &sample_results()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "meeting_type,meeting_date,last_day_to_send_notice,recommended_send_date"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Town Council,2025-08-15,2025-08-01,2025-07-29"
        );
        let second = lines.next().unwrap();
        assert!(second.starts_with("Planning and Zoning Board,2025-09-12,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_batch_writes_header_only() {
        let mut buf = Vec::new();
        write_notice_csv(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text.trim_end(),
            "meeting_type,meeting_date,last_day_to_send_notice,recommended_send_date"
        );
    }
}
