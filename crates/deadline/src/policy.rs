//! Notice policy parameters.

use crate::error::DeadlineError;

/// Policy governing how a notice deadline is derived from a meeting date.
///
/// Use the builder methods to override the defaults.
///
/// # Example
///
/// ```
/// use themis_deadline::Policy;
///
/// let policy = Policy::new()
///     .with_required_business_days(15)
///     .with_publication_buffer_days(5);
///
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Minimum business days between notice and meeting.
    required_business_days: u32,
    /// Calendar days of newspaper production lead time.
    publication_buffer_days: u32,
}

impl Policy {
    /// Creates a policy with the defaults: 10 required business days and
    /// a 3-day publication buffer.
    pub fn new() -> Self {
        Self {
            required_business_days: 10,
            publication_buffer_days: 3,
        }
    }

    /// Sets the required number of business days.
    pub fn with_required_business_days(mut self, days: u32) -> Self {
        self.required_business_days = days;
        self
    }

    /// Sets the publication buffer in calendar days.
    pub fn with_publication_buffer_days(mut self, days: u32) -> Self {
        self.publication_buffer_days = days;
        self
    }

    /// Returns the required number of business days.
    pub fn required_business_days(&self) -> u32 {
        self.required_business_days
    }

    /// Returns the publication buffer in calendar days.
    pub fn publication_buffer_days(&self) -> u32 {
        self.publication_buffer_days
    }

    /// Validates this policy.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError::InvalidPolicy`] if `required_business_days`
    /// is zero. The buffer is non-negative by construction.
    pub fn validate(&self) -> Result<(), DeadlineError> {
        if self.required_business_days == 0 {
            return Err(DeadlineError::InvalidPolicy { required: 0 });
        }
        Ok(())
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}
