//! Booking lifecycle domain service.
//!
//! Implements the booking command and query driving ports. Users may only
//! cancel their own non-terminal bookings; admins may set any status.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    BookingCommand, BookingQuery, BookingRepository, BookingRepositoryError,
};
use crate::domain::{Booking, BookingId, BookingStats, BookingStatus, Error, NewBooking, UserId};

const BOOKING_NOT_FOUND: &str = "Booking not found";

/// Log the raw repository failure and return a fixed `booking_failed` error.
fn booking_failed(
    operation: &'static str,
    message: &'static str,
) -> impl Fn(BookingRepositoryError) -> Error {
    move |err| {
        error!(operation, error = %err, "booking repository call failed");
        Error::booking_failed(message)
    }
}

/// Booking service implementing the command and query driving ports.
#[derive(Clone)]
pub struct BookingService<R> {
    booking_repo: Arc<R>,
}

impl<R> BookingService<R> {
    /// Create a new booking service with the booking repository.
    pub fn new(booking_repo: Arc<R>) -> Self {
        Self { booking_repo }
    }
}

#[async_trait]
impl<R> BookingCommand for BookingService<R>
where
    R: BookingRepository,
{
    async fn create_booking(&self, booking: &NewBooking) -> Result<BookingId, Error> {
        self.booking_repo
            .insert(booking)
            .await
            .map_err(booking_failed("create_booking", "Booking failed. Please try again."))
    }

    async fn cancel_booking(
        &self,
        booking_id: BookingId,
        user_id: Option<UserId>,
    ) -> Result<(), Error> {
        const FAILED: &str = "Failed to cancel booking";

        let Some(user_id) = user_id else {
            return Err(Error::not_found(BOOKING_NOT_FOUND));
        };

        let booking = self
            .booking_repo
            .find_owned(booking_id, user_id)
            .await
            .map_err(booking_failed("cancel_booking", FAILED))?
            .ok_or_else(|| Error::not_found(BOOKING_NOT_FOUND))?;

        if booking.status.is_terminal() {
            return Err(Error::invalid_transition("Cannot cancel this booking"));
        }

        let updated = self
            .booking_repo
            .update_status(booking_id, BookingStatus::Cancelled)
            .await
            .map_err(booking_failed("cancel_booking", FAILED))?;
        if !updated {
            return Err(Error::not_found(BOOKING_NOT_FOUND));
        }
        Ok(())
    }

    async fn set_booking_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<(), Error> {
        let updated = self
            .booking_repo
            .update_status(booking_id, status)
            .await
            .map_err(booking_failed("set_booking_status", "Failed to update status"))?;
        if !updated {
            return Err(Error::not_found(BOOKING_NOT_FOUND));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> BookingQuery for BookingService<R>
where
    R: BookingRepository,
{
    async fn list_bookings_for_user(&self, user_id: UserId) -> Result<Vec<Booking>, Error> {
        self.booking_repo
            .list_for_user(user_id)
            .await
            .map_err(booking_failed("list_bookings_for_user", "Failed to fetch bookings"))
    }

    async fn list_all_bookings(&self) -> Result<Vec<Booking>, Error> {
        self.booking_repo
            .list_all()
            .await
            .map_err(booking_failed("list_all_bookings", "Failed to fetch bookings"))
    }

    async fn booking_stats(&self) -> Result<BookingStats, Error> {
        self.booking_repo
            .stats()
            .await
            .map_err(booking_failed("booking_stats", "Failed to fetch stats"))
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
