//! Driving port for creating user accounts.

use async_trait::async_trait;

use crate::domain::{Error, SignupDetails, UserId};

/// Domain use-case port for user signup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Hash the password, store the account, and return its id.
    async fn signup(&self, details: &SignupDetails) -> Result<UserId, Error>;
}
