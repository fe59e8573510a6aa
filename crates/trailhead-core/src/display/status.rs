//! Notifications shown after an operation.

use std::fmt;

use crate::error::SubmissionError;

/// A one-line user notification.
///
/// ```rust
/// use trailhead_core::{display::Notification, error::SubmissionError};
///
/// let missing = Notification::from(&SubmissionError::Validation { field: "name" });
/// assert_eq!(missing.to_string(), "Missing: please provide the event name.\n");
/// assert_eq!(
///     Notification::success("Draft discarded").to_string(),
///     "Success: Draft discarded\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
    /// A required field is missing
    Validation { field: String },
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Notification::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

impl From<&SubmissionError> for Notification {
    fn from(error: &SubmissionError) -> Self {
        match error {
            SubmissionError::Validation { field } => Notification::Validation {
                field: (*field).to_string(),
            },
            SubmissionError::InFlight => {
                Notification::failure("The event is already being created.")
            }
            SubmissionError::NotEditing => {
                Notification::failure("Finish the earlier steps before submitting.")
            }
            SubmissionError::Store(e) => Notification::failure(format!(
                "Could not create the event ({e}). Your draft was kept; please try again."
            )),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Success(message) => writeln!(f, "Success: {message}"),
            Notification::Failure(message) => writeln!(f, "Error: {message}"),
            Notification::Validation { field } => {
                writeln!(f, "Missing: please provide the event {field}.")
            }
        }
    }
}
