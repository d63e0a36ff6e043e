//! Tests for signup and login handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{AdminId, AuthenticatedAdmin, AuthenticatedUser, ErrorCode, UserId};
use crate::inbound::http::test_utils::{MockPorts, test_app};

async fn post_json(ports: MockPorts, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(&body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn signup_returns_new_user_id() {
    let mut ports = MockPorts::default();
    ports
        .signup
        .expect_signup()
        .withf(|details| details.name() == " Ann " && details.email() == "ann@example.com")
        .times(1)
        .return_once(|_| Ok(UserId::new(12)));

    let (status, body) = post_json(
        ports,
        "/signup",
        json!({ "name": " Ann ", "email": "ann@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Signup successful", "userId": 12 })
    );
}

#[rstest]
#[case(json!({ "email": "a@x.io", "password": "pw" }), "name")]
#[case(json!({ "name": "Ann", "email": "  ", "password": "pw" }), "email")]
#[case(json!({ "name": "Ann", "email": "a@x.io", "password": "" }), "password")]
#[case(json!({}), "name")]
#[actix_web::test]
async fn signup_requires_all_fields(#[case] payload: Value, #[case] field: &str) {
    let mut ports = MockPorts::default();
    ports.signup.expect_signup().times(0);

    let (status, body) = post_json(ports, "/signup", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["message"], json!("All fields are required"));
    assert_eq!(body["details"]["field"], json!(field));
}

#[actix_web::test]
async fn signup_duplicate_email_is_conflict() {
    let mut ports = MockPorts::default();
    ports
        .signup
        .expect_signup()
        .times(1)
        .return_once(|_| Err(Error::duplicate_email("Email already exists")));

    let (status, body) = post_json(
        ports,
        "/signup",
        json!({ "name": "Ann", "email": "ann@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!("duplicate_email"));
}

#[actix_web::test]
async fn login_returns_user_id_and_name() {
    let mut ports = MockPorts::default();
    ports
        .login
        .expect_authenticate()
        .withf(|creds| creds.email() == "ann@example.com" && creds.password() == "pw")
        .times(1)
        .return_once(|_| {
            Ok(AuthenticatedUser {
                id: UserId::new(12),
                name: "Ann".to_owned(),
            })
        });

    let (status, body) = post_json(
        ports,
        "/login",
        json!({ "email": "ann@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Login successful",
            "userId": 12,
            "userName": "Ann"
        })
    );
}

#[rstest]
#[case("/login")]
#[case("/admin/login")]
#[actix_web::test]
async fn login_requires_email_and_password(#[case] uri: &str) {
    let mut ports = MockPorts::default();
    ports.login.expect_authenticate().times(0);
    ports.admin_login.expect_authenticate_admin().times(0);

    let (status, body) = post_json(ports, uri, json!({ "email": "ann@example.com" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Email and password are required"));
    assert_eq!(body["details"]["field"], json!("password"));
}

#[actix_web::test]
async fn login_rejection_is_unauthorised() {
    let mut ports = MockPorts::default();
    ports
        .login
        .expect_authenticate()
        .times(1)
        .return_once(|_| Err(Error::invalid_credentials("Invalid email or password")));

    let (status, body) = post_json(
        ports,
        "/login",
        json!({ "email": "ann@example.com", "password": "nope" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], json!(ErrorCode::InvalidCredentials));
    assert_eq!(body["message"], json!("Invalid email or password"));
}

#[actix_web::test]
async fn admin_login_returns_admin_name() {
    let mut ports = MockPorts::default();
    ports
        .admin_login
        .expect_authenticate_admin()
        .times(1)
        .return_once(|_| {
            Ok(AuthenticatedAdmin {
                id: AdminId::new(1),
                username: "dispatch".to_owned(),
            })
        });

    let (status, body) = post_json(
        ports,
        "/admin/login",
        json!({ "email": "ops@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Admin login successful",
            "adminId": 1,
            "adminName": "dispatch"
        })
    );
}

#[actix_web::test]
async fn malformed_body_is_invalid_request() {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;
    let request = actix_test::TestRequest::post()
        .uri("/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"email\":")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("invalid_request"));
}
