use super::{submit, ActionReceipt, ActionRequest};
use crate::api::BusApi;
use crate::error::ActionError;
use crate::registry::RefreshSignal;

/// Confirmation question for removing `bus_id`.
pub fn removal_prompt(bus_id: u64) -> String {
    format!(
        "Are you sure you want to remove Bus ID: {}? This cannot be undone.",
        bus_id
    )
}

/// Ask `confirm` first and only send the deletion when it answers yes.
///
/// The terminal UI asks through a popup and calls [`submit`] itself once the
/// user answers; this is the same flow for callers with a synchronous prompt.
pub async fn confirm_and_remove<F>(
    api: &dyn BusApi,
    registry: &dyn RefreshSignal,
    bus_id: u64,
    confirm: F,
) -> Result<ActionReceipt, ActionError>
where
    F: FnOnce(&str) -> bool,
{
    if !confirm(&removal_prompt(bus_id)) {
        tracing::debug!(bus_id, "bus removal declined");
        return Err(ActionError::ConfirmationAborted);
    }
    submit(api, registry, ActionRequest::RemoveBus { bus_id }).await
}
