//! Authentication primitives: login credentials and signup details.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.
//! Blank values are rejected, but accepted values are kept exactly as sent so
//! lookups match the stored rows byte-for-byte.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Name was missing or blank once trimmed.
    EmptyName,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was empty.
    EmptyPassword,
}

impl CredentialValidationError {
    /// Name of the offending request field, as sent by clients.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

fn required_text(
    value: &str,
    error: CredentialValidationError,
) -> Result<String, CredentialValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value.to_owned())
}

fn required_password(value: &str) -> Result<Zeroizing<String>, CredentialValidationError> {
    if value.is_empty() {
        return Err(CredentialValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(value.to_owned()))
}

/// Validated login credentials used by user and admin authentication.
///
/// ## Invariants
/// - `email` must not be blank and is kept verbatim for the lookup.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace so legacy plaintext rows compare byte-for-byte.
///
/// # Examples
/// ```
/// use ambulance_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("a@x.io", "pw").unwrap();
/// assert_eq!(creds.email(), "a@x.io");
/// assert!(LoginCredentials::try_from_parts("  ", "pw").is_err());
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        Ok(Self {
            email: required_text(email, CredentialValidationError::EmptyEmail)?,
            password: required_password(password)?,
        })
    }

    /// Email address used for account lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup request for a new user account.
///
/// Same blank-value rules as [`LoginCredentials`], plus a required display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl SignupDetails {
    /// Construct signup details from raw name/email/password inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, CredentialValidationError> {
        Ok(Self {
            name: required_text(name, CredentialValidationError::EmptyName)?,
            email: required_text(email, CredentialValidationError::EmptyEmail)?,
            password: required_password(password)?,
        })
    }

    /// Display name for the account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address that must be unique across users.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password to be hashed before persistence.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
