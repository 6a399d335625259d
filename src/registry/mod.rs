//! Shared bus registry.
//!
//! One [`BusRegistry`] exists per application instance. It is created once
//! and cloned into every consumer; all clones share the same snapshot. The
//! bus list is only ever replaced wholesale by [`BusRegistry::refresh`].
//!
//! Overlapping refreshes are allowed. Each one is numbered, and a response
//! older than the last applied one is dropped, so a slow early fetch can never
//! overwrite the result of a later one.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::{Bus, BusApi, RequestError};

/// What subscribers observe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrySnapshot {
    pub buses: Vec<Bus>,
    /// True while at least one fetch is outstanding.
    pub loading: bool,
    pub error: Option<String>,
}

impl RegistrySnapshot {
    pub fn find(&self, bus_id: u64) -> Option<&Bus> {
        self.buses.iter().find(|bus| bus.bus_id == bus_id)
    }
}

/// Capability to bring the shared bus collection up to date.
///
/// Action routines receive this instead of the registry itself; they never
/// need to read the list.
#[async_trait]
pub trait RefreshSignal: Send + Sync {
    async fn refresh(&self);
}

struct Inner {
    api: Arc<dyn BusApi>,
    state: watch::Sender<RegistrySnapshot>,
    next_seq: AtomicU64,
    applied_seq: Mutex<u64>,
    in_flight: AtomicUsize,
}

impl Inner {
    // The counter only changes under the channel's write lock, so `loading`
    // always agrees with it.
    fn begin_fetch(&self) {
        self.state.send_modify(|snapshot| {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            snapshot.loading = true;
        });
    }

    fn end_fetch(&self) {
        self.state.send_if_modified(|snapshot| {
            let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            if remaining > 0 {
                return false;
            }
            snapshot.loading = false;
            true
        });
    }

    fn apply(&self, seq: u64, result: Result<Vec<Bus>, RequestError>) {
        let mut applied = self.applied_seq.lock();
        if seq <= *applied {
            tracing::debug!(seq, applied = *applied, "discarding stale bus list response");
            return;
        }
        *applied = seq;

        match result {
            Ok(buses) => {
                tracing::debug!(seq, count = buses.len(), "bus list refreshed");
                self.state.send_modify(|snapshot| {
                    snapshot.buses = buses;
                    snapshot.error = None;
                });
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "bus list refresh failed");
                self.state.send_modify(|snapshot| {
                    snapshot.buses.clear();
                    snapshot.error = Some(err.user_message());
                });
            }
        }
    }
}

/// The single in-memory source of truth for the bus collection.
#[derive(Clone)]
pub struct BusRegistry {
    inner: Arc<Inner>,
}

impl BusRegistry {
    pub fn new(api: Arc<dyn BusApi>) -> Self {
        let (state, _) = watch::channel(RegistrySnapshot::default());
        Self {
            inner: Arc::new(Inner {
                api,
                state,
                next_seq: AtomicU64::new(0),
                applied_seq: Mutex::new(0),
                in_flight: AtomicUsize::new(0),
            }),
        }
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.inner.state.borrow().clone()
    }

    /// Receive a notification whenever the snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<RegistrySnapshot> {
        self.inner.state.subscribe()
    }

    /// Re-fetch the whole bus collection.
    ///
    /// `loading` is cleared when this future completes or is dropped.
    pub async fn refresh(&self) {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.begin_fetch();
        let _loading = scopeguard::guard(Arc::clone(&self.inner), |inner| inner.end_fetch());

        let result = self.inner.api.list_buses().await;
        self.inner.apply(seq, result);
    }
}

#[async_trait]
impl RefreshSignal for BusRegistry {
    async fn refresh(&self) {
        BusRegistry::refresh(self).await;
    }
}
