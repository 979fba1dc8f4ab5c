//! Pure conversion functions: CLI strings and TOML config -> crate API types.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use themis_calendar::FederalCalendar;
use themis_deadline::{MeetingType, Policy};

use crate::config::{CalendarToml, PolicyToml};

/// Parses an ISO-8601 (YYYY-MM-DD) date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}: expected YYYY-MM-DD"))
}

/// Parses a meeting type label or token.
pub fn parse_meeting_type(s: &str) -> Result<MeetingType> {
    s.parse::<MeetingType>()
        .map_err(|e| anyhow::anyhow!("{e}: expected town-council or planning-and-zoning"))
}

/// Resolves the classification reference date: an explicit `--today`
/// value, or the local date.
pub fn resolve_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Builds a [`Policy`] from the TOML section plus CLI overrides.
pub fn build_policy(
    toml: &PolicyToml,
    required_override: Option<u32>,
    buffer_override: Option<u32>,
) -> Result<Policy> {
    let policy = Policy::new()
        .with_required_business_days(required_override.unwrap_or(toml.required_business_days))
        .with_publication_buffer_days(buffer_override.unwrap_or(toml.publication_buffer_days));
    policy.validate()?;
    Ok(policy)
}

/// Builds a [`FederalCalendar`] spanning everything the computation will
/// touch.
///
/// Explicit `[calendar]` years win; otherwise the span runs from the
/// earliest of today and the meeting dates to the latest, with one year
/// of margin on each side so the backward walk cannot leave the table.
pub fn build_calendar(
    toml: &CalendarToml,
    today: NaiveDate,
    meeting_dates: &[NaiveDate],
) -> Result<FederalCalendar> {
    let min_year = meeting_dates
        .iter()
        .map(|d| d.year())
        .chain(std::iter::once(today.year()))
        .min()
        .unwrap_or(today.year());
    let max_year = meeting_dates
        .iter()
        .map(|d| d.year())
        .chain(std::iter::once(today.year()))
        .max()
        .unwrap_or(today.year());

    let start = toml.start_year.unwrap_or(min_year - 1);
    let end = toml.end_year.unwrap_or(max_year + 1);
    FederalCalendar::new(start, end).context("failed to build holiday calendar")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("2025-08-15").unwrap(), date(2025, 8, 15));
        assert_eq!(parse_date(" 2025-08-15 ").unwrap(), date(2025, 8, 15));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("08/15/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parse_meeting_type_tokens() {
        assert_eq!(
            parse_meeting_type("town-council").unwrap(),
            MeetingType::TownCouncil
        );
        assert!(parse_meeting_type("school-board").is_err());
    }

    #[test]
    fn build_policy_overrides_win() {
        let toml = PolicyToml::default();
        let policy = build_policy(&toml, Some(15), None).unwrap();
        assert_eq!(policy.required_business_days(), 15);
        assert_eq!(policy.publication_buffer_days(), 3);
    }

    #[test]
    fn build_policy_rejects_zero_required() {
        let toml = PolicyToml::default();
        assert!(build_policy(&toml, Some(0), None).is_err());
    }

    #[test]
    fn build_calendar_derived_span_has_margin() {
        let toml = CalendarToml::default();
        let cal = build_calendar(&toml, date(2025, 7, 1), &[date(2026, 1, 5)]).unwrap();
        assert_eq!(cal.start_year(), 2024);
        assert_eq!(cal.end_year(), 2027);
    }

    #[test]
    fn build_calendar_explicit_years_win() {
        let toml = CalendarToml {
            start_year: Some(2020),
            end_year: Some(2030),
        };
        let cal = build_calendar(&toml, date(2025, 7, 1), &[]).unwrap();
        assert_eq!(cal.start_year(), 2020);
        assert_eq!(cal.end_year(), 2030);
    }
}
