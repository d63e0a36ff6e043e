//! User-facing booking handlers.
//!
//! ```text
//! POST /book                              create a booking (status pending)
//! GET  /user/bookings/{userId}            list a user's bookings, newest first
//! PUT  /user/bookings/{bookingId}/cancel  {"userId":7}
//! ```
//!
//! There is no session layer: the user id comes from the path or body and is
//! only used as an equality filter.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Booking, BookingDraft, BookingId, Error, NewBooking, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookingSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /book`. Status is not accepted; new bookings are
/// always `pending`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Owning user. Absent, null, or non-positive means anonymous.
    pub user_id: Option<i64>,
    pub patient_name: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub emergency_type: Option<String>,
    /// Free-form notes, defaults to empty.
    pub notes: Option<String>,
}

impl From<CreateBookingRequest> for BookingDraft {
    fn from(value: CreateBookingRequest) -> Self {
        Self {
            user_id: value.user_id,
            patient_name: value.patient_name,
            phone: value.phone,
            pickup_location: value.pickup_location,
            drop_location: value.drop_location,
            emergency_type: value.emergency_type,
            notes: value.notes,
        }
    }
}

/// Request body for `PUT /user/bookings/{bookingId}/cancel`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    /// Requesting user; must own the booking.
    pub user_id: Option<i64>,
}

/// Response body for a created booking.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub success: bool,
    #[schema(example = "Booking confirmed!")]
    pub message: String,
    pub booking_id: i64,
}

/// Response body listing bookings.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub success: bool,
    #[schema(value_type = Vec<BookingSchema>)]
    pub bookings: Vec<Booking>,
}

/// Response body for mutations that only report success.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
        }
    }
}

/// Create a `pending` booking.
#[utoipa::path(
    post,
    path = "/book",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = BookingCreatedResponse),
        (status = 400, description = "Missing required field", body = ErrorSchema),
        (status = 500, description = "Booking failed", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/book")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let booking =
        NewBooking::try_from(BookingDraft::from(payload.into_inner())).map_err(|err| {
            Error::invalid_request("All required fields must be filled")
                .with_details(json!({ "field": err.field() }))
        })?;

    let booking_id = state.bookings.create_booking(&booking).await?;

    Ok(HttpResponse::Ok().json(BookingCreatedResponse {
        success: true,
        message: "Booking confirmed!".to_owned(),
        booking_id: booking_id.get(),
    }))
}

/// List bookings owned by a user, newest first.
#[utoipa::path(
    get,
    path = "/user/bookings/{userId}",
    params(("userId" = i64, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Bookings", body = BookingListResponse),
        (status = 400, description = "Non-numeric user id", body = ErrorSchema),
        (status = 500, description = "Failed to fetch bookings", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listUserBookings"
)]
#[get("/user/bookings/{user_id}")]
pub async fn list_user_bookings(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let user_id = UserId::new(path.into_inner());
    let bookings = state.bookings_query.list_bookings_for_user(user_id).await?;

    Ok(HttpResponse::Ok().json(BookingListResponse {
        success: true,
        bookings,
    }))
}

/// Cancel a `pending` or `dispatched` booking owned by the requesting user.
///
/// A missing body or `userId` matches no booking.
#[utoipa::path(
    put,
    path = "/user/bookings/{bookingId}/cancel",
    params(("bookingId" = i64, Path, description = "Booking id")),
    request_body = CancelBookingRequest,
    responses(
        (status = 200, description = "Booking cancelled", body = MessageResponse),
        (status = 404, description = "Booking not found for this user", body = ErrorSchema),
        (status = 409, description = "Booking is completed or cancelled", body = ErrorSchema),
        (status = 500, description = "Failed to cancel booking", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "cancelBooking"
)]
#[put("/user/bookings/{booking_id}/cancel")]
pub async fn cancel_booking(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: Option<web::Json<CancelBookingRequest>>,
) -> ApiResult<HttpResponse> {
    let booking_id = BookingId::new(path.into_inner());
    let user_id = payload.and_then(|body| UserId::from_optional(body.into_inner().user_id));

    state.bookings.cancel_booking(booking_id, user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::ok("Booking cancelled successfully")))
}

#[cfg(test)]
mod tests;
