//! Shared test utilities and scripted doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use ticketdesk::api::{
    BookingConfirmation, Bus, BusApi, CancellationReceipt, CreatedBus, NewBooking, NewBus,
    RequestError,
};
use ticketdesk::registry::RefreshSignal;

// -- Fixtures -----------------------------------------------------------------

pub fn bus(bus_id: u64, name: &str) -> Bus {
    Bus {
        bus_id,
        bus_name: name.to_string(),
        source: "A".to_string(),
        destination: "B".to_string(),
        available_seats: 10,
        fare_per_seat: 100.0,
    }
}

pub fn server_error(status: u16, detail: &str) -> RequestError {
    RequestError::Server {
        status,
        detail: detail.to_string(),
    }
}

// -- Scripted API -------------------------------------------------------------

/// A call observed by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListBuses,
    CreateBooking(NewBooking),
    CancelBooking(u64),
    AddBus(NewBus),
    RemoveBus(u64),
}

/// `BusApi` double with canned answers.
///
/// Bus list answers are consumed in order, each after its own delay; once the
/// queue is empty `list_buses` returns `default_buses`.
pub struct ScriptedApi {
    lists: Mutex<VecDeque<(Duration, Result<Vec<Bus>, RequestError>)>>,
    pub default_buses: Mutex<Vec<Bus>>,
    pub booking: Mutex<Result<BookingConfirmation, RequestError>>,
    pub cancellation: Mutex<Result<CancellationReceipt, RequestError>>,
    pub created: Mutex<Result<CreatedBus, RequestError>>,
    pub removal: Mutex<Result<(), RequestError>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            lists: Mutex::new(VecDeque::new()),
            default_buses: Mutex::new(Vec::new()),
            booking: Mutex::new(Ok(BookingConfirmation {
                booking_id: 1,
                total_fare: 100.0,
                message: None,
                passenger_id: None,
                travel_date: None,
            })),
            cancellation: Mutex::new(Ok(CancellationReceipt::default())),
            created: Mutex::new(Ok(CreatedBus { bus_id: 1 })),
            removal: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedApi {
    pub fn with_buses(buses: Vec<Bus>) -> Self {
        let api = Self::default();
        *api.default_buses.lock() = buses;
        api
    }

    pub fn push_list(&self, delay: Duration, result: Result<Vec<Bus>, RequestError>) {
        self.lists.lock().push_back((delay, result));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl BusApi for ScriptedApi {
    async fn list_buses(&self) -> Result<Vec<Bus>, RequestError> {
        self.record(Call::ListBuses);
        let scripted = self.lists.lock().pop_front();
        match scripted {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(self.default_buses.lock().clone()),
        }
    }

    async fn create_booking(
        &self,
        booking: &NewBooking,
    ) -> Result<BookingConfirmation, RequestError> {
        self.record(Call::CreateBooking(booking.clone()));
        self.booking.lock().clone()
    }

    async fn cancel_booking(&self, booking_id: u64) -> Result<CancellationReceipt, RequestError> {
        self.record(Call::CancelBooking(booking_id));
        self.cancellation.lock().clone()
    }

    async fn add_bus(&self, bus: &NewBus) -> Result<CreatedBus, RequestError> {
        self.record(Call::AddBus(bus.clone()));
        self.created.lock().clone()
    }

    async fn remove_bus(&self, bus_id: u64) -> Result<(), RequestError> {
        self.record(Call::RemoveBus(bus_id));
        self.removal.lock().clone()
    }
}

// -- Refresh spy --------------------------------------------------------------

/// Counts refresh requests without touching any registry.
#[derive(Default)]
pub struct CountingRefresh {
    count: AtomicUsize,
}

impl CountingRefresh {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RefreshSignal for CountingRefresh {
    async fn refresh(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
