//! Credential domain service: signup, user login, and admin login.
//!
//! Store and hashing failures are logged here with their raw cause and
//! surfaced to callers as fixed, client-safe messages.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::password::{AccountKind, PasswordError, verify_stored_password};
use crate::domain::ports::{
    AdminLoginService, AdminPersistenceError, AdminRepository, LoginService, SignupService,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    AuthenticatedAdmin, AuthenticatedUser, Error, LoginCredentials, NewUserAccount,
    PasswordHasher, SignupDetails, UserId,
};

const SIGNUP_FAILED: &str = "Signup failed";
const LOGIN_FAILED: &str = "Login failed";
const INVALID_USER_CREDENTIALS: &str = "Invalid email or password";
const INVALID_ADMIN_CREDENTIALS: &str = "Invalid admin credentials";

fn login_failed(cause: &dyn std::fmt::Display) -> Error {
    error!(error = %cause, "login failed");
    Error::login_failed(LOGIN_FAILED)
}

fn map_signup_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateEmail => Error::duplicate_email("Email already exists"),
        other => {
            error!(error = %other, "signup insert failed");
            Error::signup_failed(SIGNUP_FAILED)
        }
    }
}

fn map_hash_error(err: PasswordError) -> Error {
    error!(error = %err, "signup password hashing failed");
    Error::signup_failed(SIGNUP_FAILED)
}

/// Service implementing the signup and login driving ports.
#[derive(Clone)]
pub struct CredentialService<U, A> {
    users: Arc<U>,
    admins: Arc<A>,
    hasher: PasswordHasher,
}

impl<U, A> CredentialService<U, A> {
    /// Create a credential service over the account repositories.
    pub fn new(users: Arc<U>, admins: Arc<A>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            admins,
            hasher,
        }
    }
}

#[async_trait]
impl<U, A> SignupService for CredentialService<U, A>
where
    U: UserRepository,
    A: AdminRepository,
{
    async fn signup(&self, details: &SignupDetails) -> Result<UserId, Error> {
        let password_hash = self
            .hasher
            .hash(details.password())
            .await
            .map_err(map_hash_error)?;

        let account = NewUserAccount {
            name: details.name().to_owned(),
            email: details.email().to_owned(),
            password_hash,
        };
        self.users.insert(&account).await.map_err(map_signup_error)
    }
}

#[async_trait]
impl<U, A> LoginService for CredentialService<U, A>
where
    U: UserRepository,
    A: AdminRepository,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, Error> {
        let account = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(|err: UserPersistenceError| login_failed(&err))?
            .ok_or_else(|| Error::invalid_credentials(INVALID_USER_CREDENTIALS))?;

        let matched = verify_stored_password(
            AccountKind::User,
            account.id.get(),
            credentials.password(),
            account.stored_password.as_str(),
        )
        .await
        .map_err(|err| login_failed(&err))?;

        if !matched {
            return Err(Error::invalid_credentials(INVALID_USER_CREDENTIALS));
        }
        Ok(AuthenticatedUser {
            id: account.id,
            name: account.name,
        })
    }
}

#[async_trait]
impl<U, A> AdminLoginService for CredentialService<U, A>
where
    U: UserRepository,
    A: AdminRepository,
{
    async fn authenticate_admin(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedAdmin, Error> {
        let account = self
            .admins
            .find_by_email(credentials.email())
            .await
            .map_err(|err: AdminPersistenceError| login_failed(&err))?
            .ok_or_else(|| Error::invalid_credentials(INVALID_ADMIN_CREDENTIALS))?;

        let matched = verify_stored_password(
            AccountKind::Admin,
            account.id.get(),
            credentials.password(),
            account.stored_password.as_str(),
        )
        .await
        .map_err(|err| login_failed(&err))?;

        if !matched {
            return Err(Error::invalid_credentials(INVALID_ADMIN_CREDENTIALS));
        }
        Ok(AuthenticatedAdmin {
            id: account.id,
            username: account.username,
        })
    }
}

#[cfg(test)]
#[path = "credential_service_tests.rs"]
mod tests;
