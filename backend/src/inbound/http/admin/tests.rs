//! Tests for admin booking handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_utils::{MockPorts, test_app};

async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[case("pending", BookingStatus::Pending)]
#[case("dispatched", BookingStatus::Dispatched)]
#[case("completed", BookingStatus::Completed)]
#[case("cancelled", BookingStatus::Cancelled)]
#[actix_web::test]
async fn status_update_accepts_every_status(
    #[case] raw: &'static str,
    #[case] expected: BookingStatus,
) {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_set_booking_status()
        .withf(move |id, status| *id == BookingId::new(9) && *status == expected)
        .times(1)
        .return_once(|_, _| Ok(()));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::put()
            .uri("/admin/bookings/9/status")
            .set_json(json!({ "status": raw })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Status updated successfully" })
    );
}

#[rstest]
#[case(json!({ "status": "archived" }))]
#[case(json!({ "status": "Pending" }))]
#[case(json!({}))]
#[actix_web::test]
async fn unknown_status_never_reaches_the_service(#[case] payload: Value) {
    let mut ports = MockPorts::default();
    ports.bookings.expect_set_booking_status().times(0);

    let (status, body) = send(
        ports,
        actix_test::TestRequest::put()
            .uri("/admin/bookings/9/status")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_status");
    assert_eq!(body["message"], "Invalid status");
}

#[actix_web::test]
async fn status_update_for_missing_booking_is_not_found() {
    let mut ports = MockPorts::default();
    ports
        .bookings
        .expect_set_booking_status()
        .return_once(|_, _| Err(Error::not_found("Booking not found")));

    let (status, _) = send(
        ports,
        actix_test::TestRequest::put()
            .uri("/admin/bookings/404/status")
            .set_json(json!({ "status": "completed" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn lists_all_bookings() {
    let mut ports = MockPorts::default();
    ports
        .bookings_query
        .expect_list_all_bookings()
        .times(1)
        .return_once(|| Ok(Vec::new()));

    let (status, body) = send(ports, actix_test::TestRequest::get().uri("/admin/bookings")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "bookings": [] }));
}

#[actix_web::test]
async fn list_failure_uses_generic_message() {
    let mut ports = MockPorts::default();
    ports
        .bookings_query
        .expect_list_all_bookings()
        .return_once(|| Err(Error::booking_failed("Failed to fetch bookings")));

    let (status, body) = send(ports, actix_test::TestRequest::get().uri("/admin/bookings")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "booking_failed");
    assert_eq!(body["message"], "Failed to fetch bookings");
}

#[actix_web::test]
async fn stats_report_every_bucket() {
    let mut ports = MockPorts::default();
    ports
        .bookings_query
        .expect_booking_stats()
        .times(1)
        .return_once(|| {
            Ok(BookingStats {
                total: 6,
                pending: 1,
                dispatched: 2,
                completed: 2,
                cancelled: 1,
            })
        });

    let (status, body) = send(ports, actix_test::TestRequest::get().uri("/admin/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "stats": {
                "total": 6,
                "pending": 1,
                "dispatched": 2,
                "completed": 2,
                "cancelled": 1
            }
        })
    );
}
