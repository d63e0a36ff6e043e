//! Driving port for booking mutations.

use async_trait::async_trait;

use crate::domain::{BookingId, BookingStatus, Error, NewBooking, UserId};

/// Domain use-case port for creating bookings and changing their status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Create a `pending` booking.
    async fn create_booking(&self, booking: &NewBooking) -> Result<BookingId, Error>;

    /// Cancel a booking on behalf of its owner.
    ///
    /// A missing `user_id` matches no booking.
    async fn cancel_booking(
        &self,
        booking_id: BookingId,
        user_id: Option<UserId>,
    ) -> Result<(), Error>;

    /// Admin override: set any status on any booking.
    async fn set_booking_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<(), Error>;
}
