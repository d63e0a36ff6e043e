//! Password hashing and stored-password verification.
//!
//! New accounts always store a bcrypt digest. Rows created before hashing was
//! introduced still hold plaintext; [`verify_stored_password`] is the only
//! place that knows about them, so the legacy branch can be removed in one
//! edit once every row carries a digest.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking pool via [`TraceId::spawn_blocking`].

use std::fmt;

use thiserror::Error;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::TraceId;

/// bcrypt work factor used when no override is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

const BCRYPT_PREFIXES: [&str; 2] = ["$2b$", "$2a$"];

/// Failures raised while hashing or verifying passwords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Configured cost is outside the range bcrypt accepts.
    #[error("bcrypt cost {cost} is outside {min}..={max}")]
    InvalidCost { cost: u32, min: u32, max: u32 },
    /// bcrypt rejected the input while hashing.
    #[error("password hashing failed: {message}")]
    Hash { message: String },
    /// The stored digest could not be parsed or compared.
    #[error("password verification failed: {message}")]
    Verify { message: String },
    /// The blocking task panicked or was cancelled.
    #[error("password task did not complete: {message}")]
    Task { message: String },
}

/// Which account table a credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    User,
    Admin,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// Stored password classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredPasswordFormat {
    /// Value carries a `$2a$` or `$2b$` bcrypt prefix.
    Bcrypt,
    /// Anything else is treated as legacy plaintext.
    LegacyPlaintext,
}

impl StoredPasswordFormat {
    /// Classify a stored password column value.
    ///
    /// # Examples
    /// ```
    /// use ambulance_backend::domain::StoredPasswordFormat;
    ///
    /// assert_eq!(
    ///     StoredPasswordFormat::classify("$2b$10$abcdefghijklmnopqrstuv"),
    ///     StoredPasswordFormat::Bcrypt,
    /// );
    /// assert_eq!(
    ///     StoredPasswordFormat::classify("hunter2"),
    ///     StoredPasswordFormat::LegacyPlaintext,
    /// );
    /// ```
    pub fn classify(stored: &str) -> Self {
        if BCRYPT_PREFIXES.iter().any(|prefix| stored.starts_with(prefix)) {
            Self::Bcrypt
        } else {
            Self::LegacyPlaintext
        }
    }
}

/// Produces bcrypt digests at a fixed work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Build a hasher, rejecting costs bcrypt would refuse at hash time.
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        const MIN: u32 = 4;
        const MAX: u32 = 31;
        if !(MIN..=MAX).contains(&cost) {
            return Err(PasswordError::InvalidCost {
                cost,
                min: MIN,
                max: MAX,
            });
        }
        Ok(Self { cost })
    }

    /// Configured work factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password on the blocking pool.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = Zeroizing::new(password.to_owned());
        let cost = self.cost;
        TraceId::spawn_blocking(move || bcrypt::hash(password.as_str(), cost))
            .await
            .map_err(|err| PasswordError::Task {
                message: err.to_string(),
            })?
            .map_err(|err| PasswordError::Hash {
                message: err.to_string(),
            })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Check a candidate password against a stored column value.
///
/// bcrypt-prefixed values are verified as digests. Every other value is
/// compared byte-for-byte as legacy plaintext, and each successful legacy
/// match is logged at `warn` so remaining rows can be found and rehashed.
///
/// Returns `Ok(false)` on mismatch and `Err` only when a digest is malformed
/// or the blocking task fails.
pub async fn verify_stored_password(
    kind: AccountKind,
    account_id: i64,
    candidate: &str,
    stored: &str,
) -> Result<bool, PasswordError> {
    match StoredPasswordFormat::classify(stored) {
        StoredPasswordFormat::Bcrypt => {
            let candidate = Zeroizing::new(candidate.to_owned());
            let stored = Zeroizing::new(stored.to_owned());
            TraceId::spawn_blocking(move || bcrypt::verify(candidate.as_str(), stored.as_str()))
                .await
                .map_err(|err| PasswordError::Task {
                    message: err.to_string(),
                })?
                .map_err(|err| PasswordError::Verify {
                    message: err.to_string(),
                })
        }
        StoredPasswordFormat::LegacyPlaintext => {
            let matched = candidate.as_bytes() == stored.as_bytes();
            if matched {
                warn!(
                    account_kind = %kind,
                    account_id,
                    "authenticated against legacy plaintext password"
                );
            }
            Ok(matched)
        }
    }
}
