//! Error taxonomy for user actions.
//!
//! Every variant is caught by the component that issued the action and shown
//! inline; none of them is fatal to the application.

use thiserror::Error;

use crate::actions::ActionKind;
use crate::api::RequestError;

/// A form field was missing or could not be coerced. No request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingFields { fields: Vec<&'static str> },

    #[error("Please enter a Booking ID.")]
    MissingBookingId,

    #[error("{field} must be a whole number.")]
    NotAnInteger { field: &'static str },

    #[error("{field} must be a number.")]
    NotANumber { field: &'static str },

    #[error("{field} must be a date in YYYY-MM-DD format.")]
    InvalidDate { field: &'static str },
}

/// Why an action did not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    /// The user declined a destructive action; nothing was sent.
    #[error("Action cancelled.")]
    ConfirmationAborted,
}

impl ActionError {
    /// Inline message for the component that issued `kind`.
    ///
    /// Request failures carry the action's prefix (`Booking Failed: ...`);
    /// validation messages are shown as-is.
    pub fn message(&self, kind: ActionKind) -> String {
        match self {
            ActionError::Validation(err) => err.to_string(),
            ActionError::Request(err) => {
                format!("{}{}", kind.failure_prefix(), err.user_message())
            }
            ActionError::ConfirmationAborted => self.to_string(),
        }
    }
}
