//! Admin booking handlers.
//!
//! ```text
//! GET /admin/bookings
//! PUT /admin/bookings/{id}/status  {"status":"dispatched"}
//! GET /admin/stats
//! ```
//!
//! Status values are parsed here, so an unknown status never reaches the
//! service or the store.

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BookingId, BookingStats, BookingStatus, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bookings::{BookingListResponse, MessageResponse};
use crate::inbound::http::schemas::{BookingStatsSchema, BookingStatusSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `PUT /admin/bookings/{id}/status`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[schema(value_type = Option<BookingStatusSchema>)]
    pub status: Option<String>,
}

/// Response body for booking statistics.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub success: bool,
    #[schema(value_type = BookingStatsSchema)]
    pub stats: BookingStats,
}

fn parse_status(raw: Option<&str>) -> Result<BookingStatus, Error> {
    raw.and_then(|value| value.parse().ok())
        .ok_or_else(|| Error::invalid_status("Invalid status"))
}

/// List every booking, newest first.
#[utoipa::path(
    get,
    path = "/admin/bookings",
    responses(
        (status = 200, description = "Bookings", body = BookingListResponse),
        (status = 500, description = "Failed to fetch bookings", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "listAllBookings"
)]
#[get("/admin/bookings")]
pub async fn list_all_bookings(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let bookings = state.bookings_query.list_all_bookings().await?;
    Ok(HttpResponse::Ok().json(BookingListResponse {
        success: true,
        bookings,
    }))
}

/// Set any of the four statuses on a booking.
#[utoipa::path(
    put,
    path = "/admin/bookings/{id}/status",
    params(("id" = i64, Path, description = "Booking id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "Invalid status", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema),
        (status = 500, description = "Failed to update status", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "updateBookingStatus"
)]
#[put("/admin/bookings/{id}/status")]
pub async fn update_booking_status(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateStatusRequest>,
) -> ApiResult<HttpResponse> {
    let booking_id = BookingId::new(path.into_inner());
    let status = parse_status(payload.status.as_deref())?;

    state.bookings.set_booking_status(booking_id, status).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::ok("Status updated successfully")))
}

/// Counts of bookings per status.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Booking statistics", body = StatsResponse),
        (status = 500, description = "Failed to fetch stats", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "bookingStats"
)]
#[get("/admin/stats")]
pub async fn booking_stats(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let stats = state.bookings_query.booking_stats().await?;
    Ok(HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats,
    }))
}

#[cfg(test)]
mod tests;
