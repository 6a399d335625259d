//! Async side of the UI.
//!
//! The terminal loop is synchronous. It queues [`UiCommand`]s here and gets
//! results back as [`AppEvent`]s. Every command runs as its own task, so a
//! slow booking never holds up a refresh or a removal.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::actions::submit;
use crate::api::BusApi;
use crate::registry::BusRegistry;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 64;

/// Start the command loop and the registry forwarder on `handle`.
pub fn spawn_bridge(
    handle: &Handle,
    api: Arc<dyn BusApi>,
    registry: BusRegistry,
    events: std_mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_BUFFER);

    let mut snapshots = registry.subscribe();
    let snapshot_events = events.clone();
    handle.spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            if snapshot_events.send(AppEvent::Registry(snapshot)).is_err() {
                break;
            }
        }
        tracing::debug!("registry forwarder stopped");
    });

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::RefreshBuses => {
                    tracing::debug!("refresh requested");
                    let registry = registry.clone();
                    tokio::spawn(async move { registry.refresh().await });
                }
                UiCommand::Submit { origin, request } => {
                    tracing::debug!(?origin, kind = ?request.kind(), "submit requested");
                    let api = Arc::clone(&api);
                    let registry = registry.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        let outcome = submit(api.as_ref(), &registry, request).await;
                        if let Err(err) = &outcome {
                            tracing::info!(?origin, error = %err, "action failed");
                        }
                        let _ = events.send(AppEvent::ActionSettled { origin, outcome });
                    });
                }
            }
        }
        tracing::debug!("command loop stopped");
    });

    tx
}
