mod common;

use chrono::NaiveDate;
use common::mock_backend::{MockBackend, MockResponse};
use ticketdesk::api::{ApiClient, BusApi, Gender, NewBooking, NewBus, RequestError};

fn client(backend: &MockBackend) -> ApiClient {
    ApiClient::new(&backend.base_url()).expect("client")
}

#[tokio::test]
async fn list_buses_decodes_catalogue() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::json(
            r#"[{"bus_id":1,"bus_name":"Express","source":"A","destination":"B","available_seats":10,"fare_per_seat":100.0}]"#,
        ))
        .await;

    let buses = client(&backend).list_buses().await.unwrap();
    assert_eq!(buses.len(), 1);
    assert_eq!(buses[0].bus_name, "Express");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/buses");
}

#[tokio::test]
async fn create_booking_posts_wire_format() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::json(r#"{"booking_id":55,"total_fare":200.0,"passenger_id":9}"#))
        .await;

    let booking = NewBooking {
        passenger_name: "Asha".to_string(),
        age: 31,
        gender: Gender::Female,
        bus_id: 1,
        seats_to_book: 2,
        travel_date: NaiveDate::from_ymd_opt(2026, 12, 24).unwrap(),
    };
    let confirmation = client(&backend).create_booking(&booking).await.unwrap();
    assert_eq!(confirmation.booking_id, 55);
    assert_eq!(confirmation.total_fare, 200.0);
    assert_eq!(confirmation.passenger_id, Some(9));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/bookings");
    let body = requests[0].json();
    assert_eq!(body["gender"], "F");
    assert_eq!(body["seats_to_book"], 2);
    assert_eq!(body["travel_date"], "2026-12-24");
}

#[tokio::test]
async fn server_detail_becomes_error_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::detail(400, "Not enough seats available!"))
        .await;

    let err = client(&backend).cancel_booking(3).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Not enough seats available!");
}

#[tokio::test]
async fn validation_detail_list_is_joined() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            MockResponse::json(
                r#"{"detail":[{"loc":["body","age"],"msg":"field required"},{"msg":"value is not a valid integer"}]}"#,
            )
            .with_status(422),
        )
        .await;

    let err = client(&backend)
        .add_bus(&NewBus {
            bus_name: "X".to_string(),
            source: "A".to_string(),
            destination: "B".to_string(),
            total_seats: 1,
            fare_per_seat: 1.0,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "field required; value is not a valid integer"
    );
}

#[tokio::test]
async fn error_without_detail_uses_status_message() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::text(500, "Internal Server Error")).await;

    let err = client(&backend).list_buses().await.unwrap_err();
    assert_eq!(err, RequestError::Status { status: 500 });
    assert_eq!(err.user_message(), "Request failed with status code 500");
}

#[tokio::test]
async fn cancellation_accepts_empty_success_body() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::empty(204)).await;

    let receipt = client(&backend).cancel_booking(12).await.unwrap();
    assert!(receipt.message.is_none());

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/bookings/12");
}

#[tokio::test]
async fn remove_bus_ignores_success_body() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::json(r#"{"message":"Bus 3 deleted"}"#))
        .await;

    client(&backend).remove_bus(3).await.unwrap();
    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/admin/buses/3");
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(r#"{"unexpected":true}"#)).await;

    let err = client(&backend).list_buses().await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn base_url_prefix_is_kept() {
    let backend = MockBackend::start().await;
    let client = ApiClient::new(&format!("{}/api/", backend.base_url())).unwrap();
    client.list_buses().await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/buses");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = ApiClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

    let err = client.list_buses().await.unwrap_err();
    assert!(matches!(err, RequestError::Transport(_)));
    assert!(err.user_message().starts_with("Network error: "));
}
