//! HTTP inbound adapter exposing REST endpoints.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register every API route plus the extractor error handlers that turn
/// malformed bodies and paths into `invalid_request` envelopes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(auth::signup)
        .service(auth::login)
        .service(auth::admin_login)
        .service(bookings::create_booking)
        .service(bookings::list_user_bookings)
        .service(bookings::cancel_booking)
        .service(admin::list_all_bookings)
        .service(admin::update_booking_status)
        .service(admin::booking_stats);
}
