//! Meeting kinds and the record type fed into batch computation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::DeadlineError;

/// Kind of public meeting requiring a published notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeetingType {
    /// Regular town council meeting.
    TownCouncil,
    /// Planning and zoning board meeting.
    PlanningAndZoning,
}

impl MeetingType {
    /// Returns the display label used in notices and exports.
    pub fn label(self) -> &'static str {
        match self {
            MeetingType::TownCouncil => "Town Council",
            MeetingType::PlanningAndZoning => "Planning and Zoning Board",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeetingType {
    type Err = DeadlineError;

    /// Parses a meeting type from its display label or a kebab-case token.
    ///
    /// Matching is case-insensitive; spaces and underscores are treated
    /// as dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        match normalized.as_str() {
            "town-council" => Ok(MeetingType::TownCouncil),
            "planning-and-zoning" | "planning-and-zoning-board" => {
                Ok(MeetingType::PlanningAndZoning)
            }
            _ => Err(DeadlineError::UnknownMeetingType {
                value: s.to_string(),
            }),
        }
    }
}

/// A meeting entered into a batch: its kind and its date.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeetingRecord {
    meeting_type: MeetingType,
    meeting_date: NaiveDate,
}

impl MeetingRecord {
    /// Creates a new record.
    pub fn new(meeting_type: MeetingType, meeting_date: NaiveDate) -> Self {
        Self {
            meeting_type,
            meeting_date,
        }
    }

    /// Returns the meeting kind.
    pub fn meeting_type(self) -> MeetingType {
        self.meeting_type
    }

    /// Returns the meeting date.
    pub fn meeting_date(self) -> NaiveDate {
        self.meeting_date
    }
}
