//! HTTP client adapter for the booking service.
//!
//! [`ApiClient`] resolves every path against a base URL fixed at construction
//! and turns non-success responses into [`RequestError`]. There is no retry
//! and no client-side timeout; failures surface to the caller immediately.

mod error;
mod types;

pub use error::RequestError;
pub use types::{
    format_fare, BookingConfirmation, Bus, CancellationReceipt, CreatedBus, Gender, NewBooking,
    NewBus,
};

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

/// Operations the booking service exposes to the client.
///
/// The registry and the action routines only see this trait, so tests can
/// drive them with scripted implementations.
#[async_trait]
pub trait BusApi: Send + Sync {
    /// `GET /buses`
    async fn list_buses(&self) -> Result<Vec<Bus>, RequestError>;

    /// `POST /bookings`
    async fn create_booking(
        &self,
        booking: &NewBooking,
    ) -> Result<BookingConfirmation, RequestError>;

    /// `DELETE /bookings/{booking_id}`
    async fn cancel_booking(&self, booking_id: u64) -> Result<CancellationReceipt, RequestError>;

    /// `POST /admin/buses`
    async fn add_bus(&self, bus: &NewBus) -> Result<CreatedBus, RequestError>;

    /// `DELETE /admin/buses/{bus_id}`
    async fn remove_bus(&self, bus_id: u64) -> Result<(), RequestError>;
}

/// reqwest-backed implementation of [`BusApi`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://api.example.com`).
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing reqwest `Client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request and decode a JSON success body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, RequestError> {
        let body = self.send(method, path, builder).await?;
        serde_json::from_str(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// Send a request and return the raw success body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<String, RequestError> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("api", %request_id, %method, path);

        async move {
            tracing::debug!("sending request");
            let response = builder.send().await.map_err(|e| {
                tracing::warn!(error = %e, "request failed before a response");
                RequestError::from_reqwest(e)
            })?;

            let status = response.status();
            let body = response.text().await.map_err(RequestError::from_reqwest)?;

            if status.is_success() {
                tracing::debug!(status = status.as_u16(), "request succeeded");
                Ok(body)
            } else {
                let err = RequestError::from_response(status.as_u16(), &body);
                tracing::info!(status = status.as_u16(), error = %err, "server rejected request");
                Err(err)
            }
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl BusApi for ApiClient {
    async fn list_buses(&self) -> Result<Vec<Bus>, RequestError> {
        let path = "/buses";
        self.send_json(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    async fn create_booking(
        &self,
        booking: &NewBooking,
    ) -> Result<BookingConfirmation, RequestError> {
        let path = "/bookings";
        let builder = self.request(Method::POST, path).json(booking);
        self.send_json(Method::POST, path, builder).await
    }

    async fn cancel_booking(&self, booking_id: u64) -> Result<CancellationReceipt, RequestError> {
        let path = format!("/bookings/{}", booking_id);
        let builder = self.request(Method::DELETE, &path);
        let body = self.send(Method::DELETE, &path, builder).await?;
        // A bare success without a JSON body still counts as a cancellation.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn add_bus(&self, bus: &NewBus) -> Result<CreatedBus, RequestError> {
        let path = "/admin/buses";
        let builder = self.request(Method::POST, path).json(bus);
        self.send_json(Method::POST, path, builder).await
    }

    async fn remove_bus(&self, bus_id: u64) -> Result<(), RequestError> {
        let path = format!("/admin/buses/{}", bus_id);
        let builder = self.request(Method::DELETE, &path);
        self.send(Method::DELETE, &path, builder).await.map(|_| ())
    }
}
