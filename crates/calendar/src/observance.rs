//! Dated holiday instances with weekend observance shifts.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holiday::FederalHoliday;

/// A federal holiday pinned to a concrete date.
///
/// When the statutory date lands on a weekend, federal offices observe it
/// on the nearest weekday: Saturday holidays shift to the preceding Friday
/// and Sunday holidays to the following Monday. Both the statutory date and
/// the shifted date count as holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayObservance {
    holiday: FederalHoliday,
    date: NaiveDate,
    shifted: bool,
}

impl HolidayObservance {
    /// Returns the holiday identity.
    pub fn holiday(&self) -> FederalHoliday {
        self.holiday
    }

    /// Returns the date on which this instance falls.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns `true` if this instance is a weekend shift rather than the
    /// statutory date.
    pub fn is_shifted(&self) -> bool {
        self.shifted
    }

    /// Returns the display label, with an `" (observed)"` suffix for
    /// shifted instances.
    pub fn label(&self) -> String {
        if self.shifted {
            format!("{} (observed)", self.holiday.name())
        } else {
            self.holiday.name().to_string()
        }
    }
}

/// Computes every holiday observance anchored in the given year.
///
/// A shifted New Year's Day may land on December 31 of the previous year;
/// callers assembling a multi-year table must account for that spill.
pub(crate) fn observances_for_year(year: i32) -> Vec<HolidayObservance> {
    let mut out = Vec::new();
    for holiday in FederalHoliday::ALL {
        let Some(date) = holiday.date_in_year(year) else {
            continue;
        };
        out.push(HolidayObservance {
            holiday,
            date,
            shifted: false,
        });
        let shifted_date = match date.weekday() {
            Weekday::Sat => date.pred_opt(),
            Weekday::Sun => date.succ_opt(),
            _ => None,
        };
        if let Some(shifted_date) = shifted_date {
            out.push(HolidayObservance {
                holiday,
                date: shifted_date,
                shifted: true,
            });
        }
    }
    out
}
