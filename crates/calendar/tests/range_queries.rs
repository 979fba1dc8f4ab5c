use chrono::NaiveDate;

use themis_calendar::{CalendarError, FederalCalendar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_year_2025_has_eleven_entries() {
    // No 2025 federal holiday falls on a weekend, so there are no
    // observed duplicates.
    let cal = FederalCalendar::new(2025, 2025).unwrap();
    let observances = cal
        .holidays_in_range(date(2025, 1, 1), date(2025, 12, 31))
        .unwrap();
    assert_eq!(observances.len(), 11);
}

#[test]
fn full_year_2026_has_twelve_entries() {
    // July 4, 2026 is a Saturday, adding an observed Friday entry.
    let cal = FederalCalendar::new(2026, 2026).unwrap();
    let observances = cal
        .holidays_in_range(date(2026, 1, 1), date(2026, 12, 31))
        .unwrap();
    assert_eq!(observances.len(), 12);
}

#[test]
fn results_are_date_ordered() {
    let cal = FederalCalendar::new(2024, 2026).unwrap();
    let observances = cal
        .holidays_in_range(date(2024, 1, 1), date(2026, 12, 31))
        .unwrap();
    let dates: Vec<NaiveDate> = observances.iter().map(|o| o.date()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn endpoints_are_inclusive() {
    let cal = FederalCalendar::new(2025, 2025).unwrap();
    // Exactly the two endpoint holidays.
    let observances = cal
        .holidays_in_range(date(2025, 11, 27), date(2025, 12, 25))
        .unwrap();
    assert_eq!(observances.len(), 2);
    assert_eq!(observances[0].date(), date(2025, 11, 27));
    assert_eq!(observances[1].date(), date(2025, 12, 25));
}

#[test]
fn single_day_range() {
    let cal = FederalCalendar::new(2025, 2025).unwrap();
    let observances = cal
        .holidays_in_range(date(2025, 7, 4), date(2025, 7, 4))
        .unwrap();
    assert_eq!(observances.len(), 1);

    let empty = cal
        .holidays_in_range(date(2025, 7, 5), date(2025, 7, 5))
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn empty_window_between_holidays() {
    let cal = FederalCalendar::new(2025, 2025).unwrap();
    let observances = cal
        .holidays_in_range(date(2025, 7, 5), date(2025, 8, 31))
        .unwrap();
    assert!(observances.is_empty());
}

#[test]
fn inverted_range_is_rejected() {
    let cal = FederalCalendar::new(2025, 2025).unwrap();
    assert_eq!(
        cal.holidays_in_range(date(2025, 12, 31), date(2025, 1, 1))
            .unwrap_err(),
        CalendarError::InvalidDateRange {
            start: date(2025, 12, 31),
            end: date(2025, 1, 1),
        }
    );
}

#[test]
fn endpoint_outside_supported_years_is_rejected() {
    let cal = FederalCalendar::new(2025, 2025).unwrap();
    assert!(matches!(
        cal.holidays_in_range(date(2024, 12, 1), date(2025, 1, 31)),
        Err(CalendarError::YearOutOfRange { year: 2024, .. })
    ));
    assert!(matches!(
        cal.holidays_in_range(date(2025, 12, 1), date(2026, 1, 31)),
        Err(CalendarError::YearOutOfRange { year: 2026, .. })
    ));
}
