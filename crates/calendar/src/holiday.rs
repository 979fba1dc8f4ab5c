//! Federal holiday identities and their per-year date rules.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// One of the eleven U.S. federal holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FederalHoliday {
    /// January 1.
    NewYearsDay,
    /// Third Monday of January, observed since 1986.
    MartinLutherKingDay,
    /// Third Monday of February.
    WashingtonsBirthday,
    /// Last Monday of May.
    MemorialDay,
    /// June 19, observed since 2021.
    Juneteenth,
    /// July 4.
    IndependenceDay,
    /// First Monday of September.
    LaborDay,
    /// Second Monday of October.
    ColumbusDay,
    /// November 11.
    VeteransDay,
    /// Fourth Thursday of November.
    ThanksgivingDay,
    /// December 25.
    ChristmasDay,
}

impl FederalHoliday {
    /// All federal holidays, in calendar order within a year.
    pub const ALL: [FederalHoliday; 11] = [
        FederalHoliday::NewYearsDay,
        FederalHoliday::MartinLutherKingDay,
        FederalHoliday::WashingtonsBirthday,
        FederalHoliday::MemorialDay,
        FederalHoliday::Juneteenth,
        FederalHoliday::IndependenceDay,
        FederalHoliday::LaborDay,
        FederalHoliday::ColumbusDay,
        FederalHoliday::VeteransDay,
        FederalHoliday::ThanksgivingDay,
        FederalHoliday::ChristmasDay,
    ];

    /// Returns the statutory name of the holiday.
    pub fn name(self) -> &'static str {
        match self {
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MartinLutherKingDay => "Birthday of Martin Luther King, Jr.",
            FederalHoliday::WashingtonsBirthday => "Washington's Birthday",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::Juneteenth => "Juneteenth National Independence Day",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::ThanksgivingDay => "Thanksgiving Day",
            FederalHoliday::ChristmasDay => "Christmas Day",
        }
    }

    /// Returns the statutory date of the holiday in the given year.
    ///
    /// Returns `None` for years before the holiday was enacted
    /// (Martin Luther King Day before 1986, Juneteenth before 2021).
    pub fn date_in_year(self, year: i32) -> Option<NaiveDate> {
        match self {
            FederalHoliday::NewYearsDay => Some(fixed(year, 1, 1)),
            FederalHoliday::MartinLutherKingDay => {
                (year >= 1986).then(|| nth_weekday_of_month(year, 1, Weekday::Mon, 3))
            }
            FederalHoliday::WashingtonsBirthday => {
                Some(nth_weekday_of_month(year, 2, Weekday::Mon, 3))
            }
            FederalHoliday::MemorialDay => Some(last_weekday_of_month(year, 5, Weekday::Mon)),
            FederalHoliday::Juneteenth => (year >= 2021).then(|| fixed(year, 6, 19)),
            FederalHoliday::IndependenceDay => Some(fixed(year, 7, 4)),
            FederalHoliday::LaborDay => Some(nth_weekday_of_month(year, 9, Weekday::Mon, 1)),
            FederalHoliday::ColumbusDay => Some(nth_weekday_of_month(year, 10, Weekday::Mon, 2)),
            FederalHoliday::VeteransDay => Some(fixed(year, 11, 11)),
            FederalHoliday::ThanksgivingDay => Some(nth_weekday_of_month(year, 11, Weekday::Thu, 4)),
            FederalHoliday::ChristmasDay => Some(fixed(year, 12, 25)),
        }
    }
}

/// Builds a fixed-rule date that is valid in every year.
fn fixed(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday dates are valid in every year")
}

/// Returns the n-th occurrence (1-based) of `target` in the given month.
fn nth_weekday_of_month(year: i32, month: u32, target: Weekday, n: u32) -> NaiveDate {
    let first = fixed(year, month, 1);
    let offset =
        (7 + target.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    first + Duration::days(i64::from(offset + 7 * (n - 1)))
}

/// Returns the last occurrence of `target` in the given month.
fn last_weekday_of_month(year: i32, month: u32, target: Weekday) -> NaiveDate {
    let last = if month == 12 {
        fixed(year, 12, 31)
    } else {
        fixed(year, month + 1, 1)
            .pred_opt()
            .expect("day before the first of a month always exists")
    };
    let offset =
        (7 + last.weekday().num_days_from_monday() - target.num_days_from_monday()) % 7;
    last - Duration::days(i64::from(offset))
}
