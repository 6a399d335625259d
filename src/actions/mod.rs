//! User actions against the booking service.
//!
//! A form is validated into an [`ActionRequest`], sent through [`submit`],
//! and reported back as an [`ActionReceipt`] or an
//! [`ActionError`](crate::error::ActionError). Successful mutations refresh
//! the shared bus registry before the outcome is reported.

mod fields;
mod removal;
mod submit;
mod validate;

pub use fields::{initial_inputs, FieldId, FieldInput, FieldWidget, FormKind};
pub use removal::{confirm_and_remove, removal_prompt};
pub use submit::submit;
pub use validate::build_request;

use crate::api::{format_fare, NewBooking, NewBus};

/// Which action produced an outcome. Selects the failure prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Booking,
    Cancellation,
    AddBus,
    RemoveBus,
}

impl ActionKind {
    pub fn failure_prefix(self) -> &'static str {
        match self {
            ActionKind::Booking => "Booking Failed: ",
            ActionKind::Cancellation => "Cancellation Failed: ",
            ActionKind::AddBus => "Failed to add bus: ",
            ActionKind::RemoveBus => "Failed to remove bus: ",
        }
    }
}

impl FormKind {
    pub fn action_kind(self) -> ActionKind {
        match self {
            FormKind::Booking => ActionKind::Booking,
            FormKind::Cancellation => ActionKind::Cancellation,
            FormKind::AddBus => ActionKind::AddBus,
        }
    }
}

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    Book(NewBooking),
    Cancel { booking_id: u64 },
    AddBus(NewBus),
    RemoveBus { bus_id: u64 },
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Book(_) => ActionKind::Booking,
            ActionRequest::Cancel { .. } => ActionKind::Cancellation,
            ActionRequest::AddBus(_) => ActionKind::AddBus,
            ActionRequest::RemoveBus { .. } => ActionKind::RemoveBus,
        }
    }
}

/// What the server confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionReceipt {
    Booked { booking_id: u64, total_fare: f64 },
    Cancelled { message: Option<String> },
    BusAdded { bus_id: u64 },
    BusRemoved { bus_id: u64 },
}

impl ActionReceipt {
    /// Success message shown inline.
    pub fn message(&self) -> String {
        match self {
            ActionReceipt::Booked {
                booking_id,
                total_fare,
            } => format!(
                "Booking Confirmed! Your Booking ID is: {}. Total Fare: ₹{}",
                booking_id,
                format_fare(*total_fare)
            ),
            ActionReceipt::Cancelled { message } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or("Booking cancelled successfully!")
                .to_string(),
            ActionReceipt::BusAdded { bus_id } => format!("Bus Added! New Bus ID: {}", bus_id),
            ActionReceipt::BusRemoved { bus_id } => format!("Bus {} removed.", bus_id),
        }
    }
}
