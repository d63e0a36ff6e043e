//! In-memory implementation of every driven port.
//!
//! Behaves like the PostgreSQL adapters where tests can observe it: ids are
//! assigned sequentially, user emails are unique, lists are newest first, and
//! a status update touches at most one row. [`MemoryStore::set_offline`]
//! makes every call fail with a connection error.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use zeroize::Zeroizing;

use crate::domain::ports::{
    AdminPersistenceError, AdminRepository, BookingRepository, BookingRepositoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    AdminAccount, AdminId, Booking, BookingId, BookingStats, BookingStatus, NewBooking,
    NewUserAccount, UserAccount, UserId,
};

const OFFLINE: &str = "store offline";

#[derive(Default)]
struct Tables {
    users: Vec<UserAccount>,
    admins: Vec<AdminAccount>,
    bookings: Vec<Booking>,
}

/// Shared in-memory tables for users, admins, and bookings.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
    status_writes: AtomicUsize,
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).map_or(i64::MAX, |count| count + 1)
}

fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    bookings
}

impl MemoryStore {
    /// Empty, online store with no accounts or bookings.
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        match self.tables.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::Acquire)
    }

    /// Simulate losing (or regaining) the store connection.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Release);
    }

    /// Insert a user row with an arbitrary stored password, bypassing
    /// hashing. Used to seed legacy plaintext rows.
    pub fn seed_user(&self, name: &str, email: &str, stored_password: &str) -> UserId {
        let mut tables = self.tables();
        let id = UserId::new(next_id(tables.users.len()));
        tables.users.push(UserAccount {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            stored_password: Zeroizing::new(stored_password.to_owned()),
        });
        id
    }

    /// Insert an admin row. Admins are provisioned out of band.
    pub fn seed_admin(&self, username: &str, email: &str, stored_password: &str) -> AdminId {
        let mut tables = self.tables();
        let id = AdminId::new(next_id(tables.admins.len()));
        tables.admins.push(AdminAccount {
            id,
            username: username.to_owned(),
            email: email.to_owned(),
            stored_password: Zeroizing::new(stored_password.to_owned()),
        });
        id
    }

    /// Stored password column for a user, as persisted.
    pub fn stored_password(&self, email: &str) -> Option<String> {
        self.tables()
            .users
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.stored_password.as_str().to_owned())
    }

    /// Current status of a booking row.
    pub fn booking_status(&self, id: BookingId) -> Option<BookingStatus> {
        self.tables()
            .bookings
            .iter()
            .find(|booking| booking.id == id)
            .map(|booking| booking.status)
    }

    /// Number of status updates that reached the store.
    pub fn status_writes(&self) -> usize {
        self.status_writes.load(Ordering::Acquire)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: &NewUserAccount) -> Result<UserId, UserPersistenceError> {
        if self.is_offline() {
            return Err(UserPersistenceError::connection(OFFLINE));
        }
        let mut tables = self.tables();
        if tables.users.iter().any(|row| row.email == user.email) {
            return Err(UserPersistenceError::duplicate_email());
        }
        let id = UserId::new(next_id(tables.users.len()));
        tables.users.push(UserAccount {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            stored_password: Zeroizing::new(user.password_hash.clone()),
        });
        Ok(id)
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        if self.is_offline() {
            return Err(UserPersistenceError::connection(OFFLINE));
        }
        Ok(self
            .tables()
            .users
            .iter()
            .find(|row| row.email == email)
            .cloned())
    }
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminPersistenceError> {
        if self.is_offline() {
            return Err(AdminPersistenceError::connection(OFFLINE));
        }
        Ok(self
            .tables()
            .admins
            .iter()
            .find(|row| row.email == email)
            .cloned())
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn insert(&self, booking: &NewBooking) -> Result<BookingId, BookingRepositoryError> {
        if self.is_offline() {
            return Err(BookingRepositoryError::connection(OFFLINE));
        }
        let mut tables = self.tables();
        let id = BookingId::new(next_id(tables.bookings.len()));
        tables.bookings.push(Booking {
            id,
            user_id: booking.user_id(),
            patient_name: booking.patient_name().to_owned(),
            phone: booking.phone().to_owned(),
            pickup_location: booking.pickup_location().to_owned(),
            drop_location: booking.drop_location().to_owned(),
            emergency_type: booking.emergency_type().to_owned(),
            notes: booking.notes().to_owned(),
            status: booking.status(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        if self.is_offline() {
            return Err(BookingRepositoryError::connection(OFFLINE));
        }
        let owned = self
            .tables()
            .bookings
            .iter()
            .filter(|booking| booking.user_id == Some(user_id))
            .cloned()
            .collect();
        Ok(newest_first(owned))
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        if self.is_offline() {
            return Err(BookingRepositoryError::connection(OFFLINE));
        }
        Ok(newest_first(self.tables().bookings.clone()))
    }

    async fn find_owned(
        &self,
        booking_id: BookingId,
        user_id: UserId,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        if self.is_offline() {
            return Err(BookingRepositoryError::connection(OFFLINE));
        }
        Ok(self
            .tables()
            .bookings
            .iter()
            .find(|booking| booking.id == booking_id && booking.user_id == Some(user_id))
            .cloned())
    }

    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<bool, BookingRepositoryError> {
        if self.is_offline() {
            return Err(BookingRepositoryError::connection(OFFLINE));
        }
        self.status_writes.fetch_add(1, Ordering::AcqRel);
        let mut tables = self.tables();
        match tables
            .bookings
            .iter_mut()
            .find(|booking| booking.id == booking_id)
        {
            Some(booking) => {
                booking.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn stats(&self) -> Result<BookingStats, BookingRepositoryError> {
        if self.is_offline() {
            return Err(BookingRepositoryError::connection(OFFLINE));
        }
        Ok(BookingStats::tally(
            self.tables().bookings.iter().map(|booking| booking.status),
        ))
    }
}
