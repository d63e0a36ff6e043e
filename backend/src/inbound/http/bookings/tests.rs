//! Tests for user-facing booking handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{DateTime, Utc};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{BookingStatus, ErrorCode};
use crate::inbound::http::test_utils::{MockPorts, test_app};

async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

fn sample_booking(id: i64, user: Option<i64>, status: BookingStatus) -> Booking {
    Booking {
        id: BookingId::new(id),
        user_id: user.map(UserId::new),
        patient_name: "Ravi".to_owned(),
        phone: "555-0100".to_owned(),
        pickup_location: "12 Elm St".to_owned(),
        drop_location: "City Hospital".to_owned(),
        emergency_type: "cardiac".to_owned(),
        notes: String::new(),
        status,
        created_at: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc),
    }
}

fn booking_body() -> Value {
    json!({
        "userId": 7,
        "patientName": "Ravi",
        "phone": "555-0100",
        "pickupLocation": "12 Elm St",
        "dropLocation": "City Hospital",
        "emergencyType": "cardiac"
    })
}

#[actix_web::test]
async fn create_booking_confirms_with_id() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_create_booking()
        .withf(|booking| {
            booking.user_id() == Some(UserId::new(7))
                && booking.patient_name() == "Ravi"
                && booking.notes().is_empty()
        })
        .times(1)
        .return_once(|_| Ok(BookingId::new(31)));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/book")
            .set_json(booking_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Booking confirmed!", "bookingId": 31 })
    );
}

#[rstest]
#[case("patientName")]
#[case("phone")]
#[case("pickupLocation")]
#[case("dropLocation")]
#[case("emergencyType")]
#[actix_web::test]
async fn create_booking_requires_fields(#[case] field: &str) {
    let mut ports = MockPorts::default();
    ports.bookings.expect_create_booking().times(0);
    let mut payload = booking_body();
    payload[field] = json!("   ");

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post().uri("/book").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(ErrorCode::InvalidRequest));
    assert_eq!(body["message"], "All required fields must be filled");
    assert_eq!(body["details"]["field"], field);
}

#[actix_web::test]
async fn create_booking_surfaces_store_failure() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_create_booking()
        .return_once(|_| Err(Error::booking_failed("Booking failed. Please try again.")));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/book")
            .set_json(booking_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Booking failed. Please try again.");
}

#[actix_web::test]
async fn lists_user_bookings() {
    let mut ports = MockPorts::default();
    ports
        .bookings_query
        .expect_list_bookings_for_user()
        .withf(|user| *user == UserId::new(7))
        .times(1)
        .return_once(|_| {
            Ok(vec![
                sample_booking(2, Some(7), BookingStatus::Pending),
                sample_booking(1, Some(7), BookingStatus::Completed),
            ])
        });

    let (status, body) = send(
        ports,
        actix_test::TestRequest::get().uri("/user/bookings/7"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let bookings = body["bookings"].as_array().expect("bookings array");
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0]["id"], 2);
    assert_eq!(bookings[0]["patient_name"], "Ravi");
    assert_eq!(bookings[1]["status"], "completed");
}

#[actix_web::test]
async fn non_numeric_user_id_is_invalid_request() {
    let mut ports = MockPorts::default();
    ports.bookings_query.expect_list_bookings_for_user().times(0);

    let (status, body) = send(
        ports,
        actix_test::TestRequest::get().uri("/user/bookings/abc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn cancel_passes_requesting_user() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_cancel_booking()
        .withf(|booking, user| *booking == BookingId::new(5) && *user == Some(UserId::new(7)))
        .times(1)
        .return_once(|_, _| Ok(()));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::put()
            .uri("/user/bookings/5/cancel")
            .set_json(json!({ "userId": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Booking cancelled successfully" })
    );
}

#[actix_web::test]
async fn cancel_without_body_has_no_user() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_cancel_booking()
        .withf(|_, user| user.is_none())
        .times(1)
        .return_once(|_, _| Err(Error::not_found("Booking not found")));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::put().uri("/user/bookings/5/cancel"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn cancel_of_terminal_booking_conflicts() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_cancel_booking()
        .return_once(|_, _| Err(Error::invalid_transition("Cannot cancel this booking")));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::put()
            .uri("/user/bookings/5/cancel")
            .set_json(json!({ "userId": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "invalid_transition");
    assert_eq!(body["message"], "Cannot cancel this booking");
}
