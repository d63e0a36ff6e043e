//! User and admin account models.
//!
//! Accounts are read from the store with their stored password value, which
//! is either a bcrypt digest or a legacy plaintext string. Only the
//! authenticated projections leave the domain.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Store-assigned identifier of a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw store identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Interpret a client-supplied id; absent or non-positive values mean no user.
    ///
    /// # Examples
    /// ```
    /// use ambulance_backend::domain::UserId;
    ///
    /// assert_eq!(UserId::from_optional(Some(7)), Some(UserId::new(7)));
    /// assert_eq!(UserId::from_optional(Some(0)), None);
    /// assert_eq!(UserId::from_optional(None), None);
    /// ```
    pub fn from_optional(id: Option<i64>) -> Option<Self> {
        id.filter(|value| *value > 0).map(Self)
    }

    /// Raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned identifier of an admin row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(i64);

impl AdminId {
    /// Wrap a raw store identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored user account, including its password column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub stored_password: Zeroizing<String>,
}

/// Stored admin account, including its password column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: AdminId,
    pub username: String,
    pub email: String,
    pub stored_password: Zeroizing<String>,
}

/// New user row ready for insertion. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Result of a successful user login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
}

/// Result of a successful admin login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub id: AdminId,
    pub username: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(1))]
    #[case(Some(42), Some(42))]
    #[case(Some(0), None)]
    #[case(Some(-3), None)]
    #[case(None, None)]
    fn from_optional_drops_non_positive_ids(
        #[case] raw: Option<i64>,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(UserId::from_optional(raw).map(UserId::get), expected);
    }

    #[rstest]
    fn ids_serialise_as_bare_numbers() {
        let value = serde_json::to_value(UserId::new(5)).expect("serialise user id");
        assert_eq!(value, serde_json::json!(5));
        let value = serde_json::to_value(AdminId::new(9)).expect("serialise admin id");
        assert_eq!(value, serde_json::json!(9));
    }
}
