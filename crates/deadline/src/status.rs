//! Status classification of a deadline relative to the current date.

use std::fmt;

use chrono::NaiveDate;

/// Where today stands relative to a notice deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// On or before the recommended send date: ample time remains.
    Safe,
    /// Past the recommended send date but the deadline has not passed:
    /// send the notice as soon as possible.
    Buffer,
    /// The deadline has passed; the notice may not be published in time.
    Missed,
}

impl Status {
    /// Returns the lowercase badge text.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Buffer => "buffer",
            Status::Missed => "missed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `today` against a deadline and its recommended send date.
///
/// Comparisons are strict at both boundaries, so equality always takes
/// the more lenient branch: `today == deadline_date` is [`Status::Buffer`]
/// (or [`Status::Safe`] with a zero buffer), and
/// `today == recommended_send_date` is [`Status::Safe`].
pub fn classify(
    today: NaiveDate,
    deadline_date: NaiveDate,
    recommended_send_date: NaiveDate,
) -> Status {
    if today > deadline_date {
        Status::Missed
    } else if today > recommended_send_date {
        Status::Buffer
    } else {
        Status::Safe
    }
}
