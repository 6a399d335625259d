use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled route offering as returned by `GET /buses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub bus_id: u64,
    pub bus_name: String,
    pub source: String,
    pub destination: String,
    pub available_seats: u32,
    pub fare_per_seat: f64,
}

/// Passenger gender codes accepted by the booking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub passenger_name: String,
    pub age: u32,
    pub gender: Gender,
    pub bus_id: u64,
    pub seats_to_book: u32,
    pub travel_date: NaiveDate,
}

/// Success body of `POST /bookings`.
///
/// Only `booking_id` and `total_fare` are required; the rest is echoed by the
/// server and kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: u64,
    pub total_fare: f64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub passenger_id: Option<u64>,
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
}

/// Success body of `DELETE /bookings/{booking_id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CancellationReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /admin/buses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBus {
    pub bus_name: String,
    pub source: String,
    pub destination: String,
    pub total_seats: u32,
    pub fare_per_seat: f64,
}

/// Success body of `POST /admin/buses`. The server returns the whole bus;
/// only the assigned id matters to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBus {
    pub bus_id: u64,
}

/// Render a fare with at least one decimal place (`200.0`, `99.5`).
pub fn format_fare(fare: f64) -> String {
    if fare.fract() == 0.0 && fare.is_finite() {
        format!("{:.1}", fare)
    } else {
        format!("{}", fare)
    }
}
