//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.
//!
//! Lists order by `created_at DESC, id DESC`, served by the
//! `(user_id, created_at DESC)` index for per-user reads. Stats come from a
//! single `COUNT(*) FILTER` aggregate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, BookingStats, BookingStatus, NewBooking, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookingRow, BookingStatsRow, NewBookingRow};
use super::pool::{DbPool, PoolError};
use super::schema::bookings;

const STATS_QUERY: &str = "SELECT \
    COUNT(*) AS total, \
    COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
    COUNT(*) FILTER (WHERE status = 'dispatched') AS dispatched, \
    COUNT(*) FILTER (WHERE status = 'completed') AS completed, \
    COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled \
    FROM bookings";

/// Diesel-backed implementation of the booking repository port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(error, BookingRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookingRepositoryError {
    map_basic_diesel_error(
        error,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

/// Convert a database row into a domain booking.
fn row_to_booking(row: BookingRow) -> Result<Booking, BookingRepositoryError> {
    let status = row
        .status
        .parse::<BookingStatus>()
        .map_err(|err| BookingRepositoryError::query(err.to_string()))?;

    Ok(Booking {
        id: BookingId::new(row.id),
        user_id: row.user_id.map(UserId::new),
        patient_name: row.patient_name,
        phone: row.phone,
        pickup_location: row.pickup_location,
        drop_location: row.drop_location,
        emergency_type: row.emergency_type,
        notes: row.notes,
        status,
        created_at: row.created_at,
    })
}

fn rows_to_bookings(rows: Vec<BookingRow>) -> Result<Vec<Booking>, BookingRepositoryError> {
    rows.into_iter().map(row_to_booking).collect()
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn insert(&self, booking: &NewBooking) -> Result<BookingId, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewBookingRow {
            user_id: booking.user_id().map(UserId::get),
            patient_name: booking.patient_name(),
            phone: booking.phone(),
            pickup_location: booking.pickup_location(),
            drop_location: booking.drop_location(),
            emergency_type: booking.emergency_type(),
            notes: booking.notes(),
            status: booking.status().as_str(),
        };

        diesel::insert_into(bookings::table)
            .values(&row)
            .returning(bookings::id)
            .get_result::<i64>(&mut conn)
            .await
            .map(BookingId::new)
            .map_err(map_diesel_error)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookingRow> = bookings::table
            .filter(bookings::user_id.eq(user_id.get()))
            .order((bookings::created_at.desc(), bookings::id.desc()))
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_bookings(rows)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookingRow> = bookings::table
            .order((bookings::created_at.desc(), bookings::id.desc()))
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_bookings(rows)
    }

    async fn find_owned(
        &self,
        booking_id: BookingId,
        user_id: UserId,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = bookings::table
            .filter(
                bookings::id
                    .eq(booking_id.get())
                    .and(bookings::user_id.eq(user_id.get())),
            )
            .select(BookingRow::as_select())
            .first::<BookingRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_booking).transpose()
    }

    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<bool, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(bookings::table.find(booking_id.get()))
            .set(bookings::status.eq(status.as_str()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn stats(&self) -> Result<BookingStats, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::sql_query(STATS_QUERY)
            .get_result::<BookingStatsRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(BookingStats {
            total: row.total,
            pending: row.pending,
            dispatched: row.dispatched,
            completed: row.completed,
            cancelled: row.cancelled,
        })
    }
}
