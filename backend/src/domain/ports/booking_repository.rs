//! Port for booking persistence, status updates, and aggregate counts.

use async_trait::async_trait;

use crate::domain::{Booking, BookingId, BookingStats, BookingStatus, NewBooking, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
    }
}

/// Port for reading and writing bookings.
///
/// List operations return bookings newest first, ties broken by id descending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new `pending` booking and return its id.
    async fn insert(&self, booking: &NewBooking) -> Result<BookingId, BookingRepositoryError>;

    /// Bookings owned by one user.
    async fn list_for_user(&self, user_id: UserId)
    -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Every booking.
    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Fetch a booking only if it belongs to `user_id`.
    async fn find_owned(
        &self,
        booking_id: BookingId,
        user_id: UserId,
    ) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Overwrite a booking's status. Returns `false` when no row matched.
    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<bool, BookingRepositoryError>;

    /// Per-status counts computed in one aggregate read.
    async fn stats(&self) -> Result<BookingStats, BookingRepositoryError>;
}
