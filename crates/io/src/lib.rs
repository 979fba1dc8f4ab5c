//! # themis-io
//!
//! Delimited-table export and import for notice deadline batches: the
//! downloadable notice table and CSV batch input for the CLI.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `row` | Serde row shapes and the column contract |
//! | `writer` | Notice table export |
//! | `reader` | Batch input and notice table re-parsing |
//! | `error` | Error types |

mod error;
mod reader;
mod row;
mod writer;

pub use error::IoError;
pub use reader::{read_batch_csv, read_notice_csv};
pub use row::{BatchRow, NoticeRow};
pub use writer::{export_notice_csv, write_notice_csv, NOTICE_HEADER};
