//! # themis-calendar
//!
//! U.S. federal holiday calendar with business-day queries.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use themis_calendar::FederalCalendar;
//!
//! let cal = FederalCalendar::new(2025, 2026).unwrap();
//!
//! // July 4, 2025 falls on a Friday.
//! let independence_day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
//! assert!(cal.is_holiday(independence_day).unwrap());
//! assert!(!cal.is_business_day(independence_day).unwrap());
//!
//! // Saturday holidays are also observed on the preceding Friday.
//! let observed = NaiveDate::from_ymd_opt(2026, 7, 3).unwrap();
//! assert!(cal.is_holiday(observed).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `holiday` | Holiday identities and per-year date rules |
//! | `observance` | Dated instances with weekend observance shifts |
//! | `calendar` | Precomputed table and business-day queries |
//! | `error` | Error types |

mod calendar;
mod error;
mod holiday;
mod observance;

pub use calendar::FederalCalendar;
pub use error::CalendarError;
pub use holiday::FederalHoliday;
pub use observance::HolidayObservance;
