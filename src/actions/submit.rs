use super::{ActionReceipt, ActionRequest};
use crate::api::BusApi;
use crate::error::ActionError;
use crate::registry::RefreshSignal;

/// Send exactly one request for `request`.
///
/// On success the registry is refreshed once, and the refresh has finished by
/// the time the receipt is returned. Failures never trigger a refresh.
pub async fn submit(
    api: &dyn BusApi,
    registry: &dyn RefreshSignal,
    request: ActionRequest,
) -> Result<ActionReceipt, ActionError> {
    let kind = request.kind();
    tracing::debug!(?kind, "submitting action");

    let receipt = match request {
        ActionRequest::Book(booking) => {
            let confirmation = api.create_booking(&booking).await?;
            ActionReceipt::Booked {
                booking_id: confirmation.booking_id,
                total_fare: confirmation.total_fare,
            }
        }
        ActionRequest::Cancel { booking_id } => {
            let receipt = api.cancel_booking(booking_id).await?;
            ActionReceipt::Cancelled {
                message: receipt.message,
            }
        }
        ActionRequest::AddBus(bus) => {
            let created = api.add_bus(&bus).await?;
            ActionReceipt::BusAdded {
                bus_id: created.bus_id,
            }
        }
        ActionRequest::RemoveBus { bus_id } => {
            api.remove_bus(bus_id).await?;
            ActionReceipt::BusRemoved { bus_id }
        }
    };

    tracing::info!(?kind, "action succeeded, refreshing buses");
    registry.refresh().await;
    Ok(receipt)
}
