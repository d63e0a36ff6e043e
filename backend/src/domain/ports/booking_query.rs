//! Driving port for booking reads.

use async_trait::async_trait;

use crate::domain::{Booking, BookingStats, Error, UserId};

/// Domain use-case port for listing bookings and reading aggregate counts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Bookings owned by a user, newest first.
    async fn list_bookings_for_user(&self, user_id: UserId) -> Result<Vec<Booking>, Error>;

    /// All bookings, newest first.
    async fn list_all_bookings(&self) -> Result<Vec<Booking>, Error>;

    /// Counts per status.
    async fn booking_stats(&self) -> Result<BookingStats, Error>;
}
