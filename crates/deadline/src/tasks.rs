//! Session-scoped task tracking for entered meetings.
//!
//! The board is a caller-owned mapping; nothing here touches global state
//! and nothing survives the hosting session unless the caller keeps the
//! value alive.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::meeting::{MeetingRecord, MeetingType};

/// Key identifying a meeting on the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskKey {
    /// Kind of meeting.
    pub meeting_type: MeetingType,
    /// Date of the meeting.
    pub meeting_date: NaiveDate,
}

impl TaskKey {
    /// Creates a key from its parts.
    pub fn new(meeting_type: MeetingType, meeting_date: NaiveDate) -> Self {
        Self {
            meeting_type,
            meeting_date,
        }
    }

    /// Creates the key for a meeting record.
    pub fn for_record(record: &MeetingRecord) -> Self {
        Self::new(record.meeting_type(), record.meeting_date())
    }
}

/// Per-meeting checklist flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFlags {
    /// The notice text has been drafted.
    pub notice_drafted: bool,
    /// The notice has been sent to the newspaper.
    pub sent_to_newspaper: bool,
    /// The newspaper has confirmed publication.
    pub publication_confirmed: bool,
}

/// Caller-owned task board keyed by meeting type and date.
///
/// Entries are created on first mutable reference and cleared by
/// [`TaskBoard::reset`].
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    entries: BTreeMap<TaskKey, TaskFlags>,
}

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flags for a meeting, if the entry exists.
    pub fn flags(&self, key: &TaskKey) -> Option<&TaskFlags> {
        self.entries.get(key)
    }

    /// Returns the flags for a meeting, creating a default entry on first
    /// reference.
    pub fn flags_mut(&mut self, key: TaskKey) -> &mut TaskFlags {
        self.entries.entry(key).or_default()
    }

    /// Returns the number of tracked meetings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no meetings are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TaskKey, &TaskFlags)> {
        self.entries.iter()
    }

    /// Discards all entries.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
