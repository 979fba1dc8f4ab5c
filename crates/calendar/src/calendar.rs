//! Precomputed federal holiday table with business-day queries.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::observance::{observances_for_year, HolidayObservance};

/// An immutable federal holiday calendar covering an inclusive year range.
///
/// All observances are precomputed at construction; queries are pure
/// lookups with no I/O. Queries outside the constructed range fail with
/// [`CalendarError::YearOutOfRange`] rather than silently treating the
/// year as holiday-free.
#[derive(Debug, Clone)]
pub struct FederalCalendar {
    start_year: i32,
    end_year: i32,
    holidays: BTreeMap<NaiveDate, HolidayObservance>,
}

impl FederalCalendar {
    /// Builds the calendar for the inclusive year range `start_year..=end_year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if `start_year > end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, CalendarError> {
        if start_year > end_year {
            return Err(CalendarError::InvalidYearRange {
                start: start_year,
                end: end_year,
            });
        }
        let mut holidays = BTreeMap::new();
        // One extra year catches a New Year's Day observed on Dec 31
        // of the last supported year.
        for year in start_year..=end_year.saturating_add(1) {
            for observance in observances_for_year(year) {
                let date = observance.date();
                if date.year() >= start_year && date.year() <= end_year {
                    holidays.insert(date, observance);
                }
            }
        }
        Ok(Self {
            start_year,
            end_year,
            holidays,
        })
    }

    /// Returns the first supported year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the last supported year.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns `true` if the date is a federal holiday (statutory or observed).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the date's year is
    /// outside the constructed range.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        self.check_supported(date)?;
        Ok(self.holidays.contains_key(&date))
    }

    /// Returns the observance falling on the date, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the date's year is
    /// outside the constructed range.
    pub fn holiday_on(&self, date: NaiveDate) -> Result<Option<&HolidayObservance>, CalendarError> {
        self.check_supported(date)?;
        Ok(self.holidays.get(&date))
    }

    /// Returns `true` if the date is a business day: Monday through Friday
    /// and not a federal holiday.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the date's year is
    /// outside the constructed range.
    pub fn is_business_day(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            self.check_supported(date)?;
            return Ok(false);
        }
        Ok(!self.is_holiday(date)?)
    }

    /// Returns all observances in `start..=end`, inclusive of both
    /// endpoints, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateRange`] if `start > end`, or
    /// [`CalendarError::YearOutOfRange`] if either endpoint's year is
    /// outside the constructed range.
    pub fn holidays_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<&HolidayObservance>, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidDateRange { start, end });
        }
        self.check_supported(start)?;
        self.check_supported(end)?;
        Ok(self.holidays.range(start..=end).map(|(_, o)| o).collect())
    }

    fn check_supported(&self, date: NaiveDate) -> Result<(), CalendarError> {
        let year = date.year();
        if year < self.start_year || year > self.end_year {
            return Err(CalendarError::YearOutOfRange {
                year,
                start: self.start_year,
                end: self.end_year,
            });
        }
        Ok(())
    }
}
