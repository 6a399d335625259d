use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RemovalIntent {
    /// Ask the user to confirm removing `bus_id`.
    Request { bus_id: u64 },
    /// The user said yes; the bus becomes in flight.
    Confirm,
    /// The user said no, or closed the prompt.
    Decline,
    /// The deletion request finished.
    Settled {
        bus_id: u64,
        outcome: Result<String, String>,
    },
}

impl Intent for RemovalIntent {}
