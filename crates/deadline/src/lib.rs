//! # themis-deadline
//!
//! Notice deadline computation for public meetings: the backward
//! business-day walk, the publication buffer, status classification
//! against the current date, and batch aggregation.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use themis_calendar::FederalCalendar;
//! use themis_deadline::{compute_batch, MeetingRecord, MeetingType, Policy, Status};
//!
//! let calendar = FederalCalendar::new(2025, 2025).unwrap();
//! let records = [MeetingRecord::new(
//!     MeetingType::TownCouncil,
//!     NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
//! )];
//! let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
//!
//! let results = compute_batch(&records, &Policy::default(), &calendar, today).unwrap();
//! assert_eq!(
//!     results[0].deadline_date(),
//!     NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
//! );
//! assert_eq!(results[0].status(), Status::Safe);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `meeting` | Meeting kinds and records |
//! | `policy` | Required-days and buffer parameters |
//! | `walk` | Backward business-day scan and buffer subtraction |
//! | `status` | Classification against the current date |
//! | `batch` | Ordered batch aggregation |
//! | `tasks` | Caller-owned session task board |
//! | `error` | Error types |

mod batch;
mod error;
mod meeting;
mod policy;
mod status;
mod tasks;
mod walk;

pub use batch::{compute_batch, DeadlineResult};
pub use error::DeadlineError;
pub use meeting::{MeetingRecord, MeetingType};
pub use policy::Policy;
pub use status::{classify, Status};
pub use tasks::{TaskBoard, TaskFlags, TaskKey};
pub use walk::{compute_deadline, compute_recommended_send};
