//! Driven ports for user and admin account persistence.

use async_trait::async_trait;

use crate::domain::{AdminAccount, NewUserAccount, UserAccount, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email address is already registered.
        DuplicateEmail => "user email already exists",
    }
}

define_port_error! {
    /// Persistence errors raised by admin repository adapters.
    pub enum AdminPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "admin repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "admin repository query failed: {message}",
    }
}

/// Port for creating and looking up regular user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the store-assigned id.
    ///
    /// A unique-constraint violation on email must surface as
    /// [`UserPersistenceError::DuplicateEmail`].
    async fn insert(&self, user: &NewUserAccount) -> Result<UserId, UserPersistenceError>;

    /// Fetch a user by exact email.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserAccount>, UserPersistenceError>;
}

/// Port for looking up admin accounts. Admins are provisioned out of band.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Fetch an admin by exact email.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminPersistenceError>;
}
