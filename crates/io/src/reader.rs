//! CSV readers for batch input files and exported notice tables.

use std::io::Read;
use std::path::Path;

use tracing::info;

use themis_deadline::MeetingRecord;

use crate::error::IoError;
use crate::row::{BatchRow, NoticeRow};

/// Reads a batch input file: a headered CSV with `meeting_type` and
/// `meeting_date` columns, one meeting per row, order preserved.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if the path does not exist.
/// - [`IoError::Csv`] for structural CSV problems.
/// - [`IoError::Parse`] with the offending data-row number for
///   unrecognized meeting types.
pub fn read_batch_csv(path: &Path) -> Result<Vec<MeetingRecord>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<BatchRow>().enumerate() {
        let row = row?;
        records.push(row.to_record(idx + 1)?);
    }
    info!(path = %path.display(), n_meetings = records.len(), "batch input read");
    Ok(records)
}

/// Re-parses an exported notice table from any [`Read`] source.
///
/// Rows come back in file order with fully typed dates; combined with
/// [`crate::write_notice_csv`] this round-trips a batch exactly.
///
/// # Errors
///
/// Returns [`IoError::Csv`] for structural or value-level deserialization
/// failures.
pub fn read_notice_csv<R: Read>(source: R) -> Result<Vec<NoticeRow>, IoError> {
    let mut reader = csv::Reader::from_reader(source);
    let mut rows = Vec::new();
    for row in reader.deserialize::<NoticeRow>() {
        rows.push(row?);
    }
    Ok(rows)
}
