//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the request plumbing lives here rather than being copied into each file.

#![allow(
    dead_code,
    reason = "each integration test crate uses a different subset"
)]

pub mod embedded_postgres;

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use ambulance_backend::domain::TRACE_ID_HEADER;
use ambulance_backend::test_support::MemoryStore;
use ambulance_backend::test_support::app::memory_app;
use serde_json::Value;

/// Captured response parts most assertions need.
#[derive(Debug)]
pub struct Captured {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// Request timeout generous enough for bcrypt at test cost.
pub const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Initialise the full application over `store`.
pub async fn init_app(
    store: Arc<MemoryStore>,
) -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<BoxBody>,
    Error = actix_web::Error,
> {
    actix_test::init_service(memory_app(store, TEST_REQUEST_TIMEOUT)).await
}

/// Send a request and capture status, trace header, and JSON body.
pub async fn send<S>(app: &S, request: actix_test::TestRequest) -> Captured
where
    S: Service<
            actix_http::Request,
            Response = ServiceResponse<BoxBody>,
            Error = actix_web::Error,
        >,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(response).await;
    Captured {
        status,
        trace_id,
        body,
    }
}

/// `POST` a JSON body.
pub fn post(uri: &str, body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri(uri).set_json(body)
}

/// `PUT` a JSON body.
pub fn put(uri: &str, body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::put().uri(uri).set_json(body)
}

/// `GET` without a body.
pub fn get(uri: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::get().uri(uri)
}

/// bcrypt digest at the lowest cost, for seeding hashed rows.
pub fn digest(password: &str) -> String {
    bcrypt::hash(password, 4).expect("bcrypt hashes at minimum cost")
}
