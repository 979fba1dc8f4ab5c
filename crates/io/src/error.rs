//! Error types for themis-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the themis-io crate.
///
/// This enum covers filesystem failures, CSV-level errors, and value
/// parsing problems encountered while reading batch input or re-parsing
/// an exported table.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an I/O error raised outside the CSV layer.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a field value in a data row cannot be parsed.
    #[error("record {record}: {reason}")]
    Parse {
        /// 1-based data-row number (excluding the header).
        record: usize,
        /// Description of the parse failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}
