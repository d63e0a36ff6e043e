//! Signup and login handlers for users and admins.
//!
//! ```text
//! POST /signup      {"name":"Ann","email":"ann@example.com","password":"pw"}
//! POST /login       {"email":"ann@example.com","password":"pw"}
//! POST /admin/login {"email":"ops@example.com","password":"pw"}
//! ```
//!
//! Request fields are optional at the wire level so that missing and blank
//! values produce the same `invalid_request` envelope.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{CredentialValidationError, Error, LoginCredentials, SignupDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const SIGNUP_FIELDS_REQUIRED: &str = "All fields are required";
const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";

/// Request body for `POST /signup`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /login` and `POST /admin/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful signup.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub success: bool,
    #[schema(example = "Signup successful")]
    pub message: String,
    pub user_id: i64,
}

/// Response body for a successful user login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    #[schema(example = "Login successful")]
    pub message: String,
    pub user_id: i64,
    pub user_name: String,
}

/// Response body for a successful admin login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub success: bool,
    #[schema(example = "Admin login successful")]
    pub message: String,
    pub admin_id: i64,
    /// The admin's username.
    pub admin_name: String,
}

fn map_validation_error(message: &'static str) -> impl Fn(CredentialValidationError) -> Error {
    move |err| Error::invalid_request(message).with_details(json!({ "field": err.field() }))
}

fn login_credentials(request: LoginRequest) -> Result<LoginCredentials, Error> {
    LoginCredentials::try_from_parts(
        request.email.as_deref().unwrap_or_default(),
        request.password.as_deref().unwrap_or_default(),
    )
    .map_err(map_validation_error(LOGIN_FIELDS_REQUIRED))
}

/// Create a user account with a bcrypt-hashed password.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing or blank field", body = ErrorSchema),
        (status = 409, description = "Email already exists", body = ErrorSchema),
        (status = 500, description = "Signup failed", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let details = SignupDetails::try_from_parts(
        request.name.as_deref().unwrap_or_default(),
        request.email.as_deref().unwrap_or_default(),
        request.password.as_deref().unwrap_or_default(),
    )
    .map_err(map_validation_error(SIGNUP_FIELDS_REQUIRED))?;

    let user_id = state.signup.signup(&details).await?;

    Ok(HttpResponse::Ok().json(SignupResponse {
        success: true,
        message: "Signup successful".to_owned(),
        user_id: user_id.get(),
    }))
}

/// Authenticate a user by email and password.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing or blank field", body = ErrorSchema),
        (status = 401, description = "Invalid email or password", body = ErrorSchema),
        (status = 500, description = "Login failed", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = login_credentials(payload.into_inner())?;
    let user = state.login.authenticate(&credentials).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: "Login successful".to_owned(),
        user_id: user.id.get(),
        user_name: user.name,
    }))
}

/// Authenticate an admin by email and password.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin login success", body = AdminLoginResponse),
        (status = 400, description = "Missing or blank field", body = ErrorSchema),
        (status = 401, description = "Invalid admin credentials", body = ErrorSchema),
        (status = 500, description = "Login failed", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "adminLogin"
)]
#[post("/admin/login")]
pub async fn admin_login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = login_credentials(payload.into_inner())?;
    let admin = state.admin_login.authenticate_admin(&credentials).await?;

    Ok(HttpResponse::Ok().json(AdminLoginResponse {
        success: true,
        message: "Admin login successful".to_owned(),
        admin_id: admin.id.get(),
        admin_name: admin.username,
    }))
}

#[cfg(test)]
mod tests;
