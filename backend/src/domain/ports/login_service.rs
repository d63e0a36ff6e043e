//! Driving ports for user and admin authentication.
//!
//! Inbound adapters call these to authenticate credentials without knowing
//! the backing store, so handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{AuthenticatedAdmin, AuthenticatedUser, Error, LoginCredentials};

/// Domain use-case port for regular user login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    async fn authenticate(&self, credentials: &LoginCredentials)
    -> Result<AuthenticatedUser, Error>;
}

/// Domain use-case port for admin login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminLoginService: Send + Sync {
    /// Validate credentials against the admin table.
    async fn authenticate_admin(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedAdmin, Error>;
}
