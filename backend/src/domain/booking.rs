//! Booking data model and status lifecycle.
//!
//! A booking is created `pending`. Users may cancel it while it is `pending`
//! or `dispatched`; admins may set any of the four statuses at any time.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Store-assigned identifier of a booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Wrap a raw store identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Dispatched,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Dispatched,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Lowercase name as stored in the `status` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Dispatched => "dispatched",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether users are barred from cancelling a booking in this status.
    ///
    /// # Examples
    /// ```
    /// use ambulance_backend::domain::BookingStatus;
    ///
    /// assert!(BookingStatus::Completed.is_terminal());
    /// assert!(!BookingStatus::Dispatched.is_terminal());
    /// ```
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {value}")]
pub struct UnknownBookingStatus {
    pub value: String,
}

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownBookingStatus {
                value: s.to_owned(),
            })
    }
}

/// Persisted booking as returned to clients.
///
/// Serialises with the row's column names; `created_at` is RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: Option<UserId>,
    pub patient_name: String,
    pub phone: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub emergency_type: String,
    pub notes: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Required booking field that was missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("patient name must not be empty")]
    EmptyPatientName,
    #[error("phone must not be empty")]
    EmptyPhone,
    #[error("pickup location must not be empty")]
    EmptyPickupLocation,
    #[error("drop location must not be empty")]
    EmptyDropLocation,
    #[error("emergency type must not be empty")]
    EmptyEmergencyType,
}

impl BookingValidationError {
    /// Name of the offending request field, as sent by clients.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyPatientName => "patientName",
            Self::EmptyPhone => "phone",
            Self::EmptyPickupLocation => "pickupLocation",
            Self::EmptyDropLocation => "dropLocation",
            Self::EmptyEmergencyType => "emergencyType",
        }
    }
}

/// Unvalidated booking input as received from an inbound adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub user_id: Option<i64>,
    pub patient_name: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub emergency_type: Option<String>,
    pub notes: Option<String>,
}

/// Validated booking ready for insertion. Its status is always `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    user_id: Option<UserId>,
    patient_name: String,
    phone: String,
    pickup_location: String,
    drop_location: String,
    emergency_type: String,
    notes: String,
}

fn required(
    value: Option<String>,
    error: BookingValidationError,
) -> Result<String, BookingValidationError> {
    value.filter(|raw| !raw.trim().is_empty()).ok_or(error)
}

impl TryFrom<BookingDraft> for NewBooking {
    type Error = BookingValidationError;

    fn try_from(draft: BookingDraft) -> Result<Self, Self::Error> {
        use BookingValidationError as E;
        Ok(Self {
            user_id: UserId::from_optional(draft.user_id),
            patient_name: required(draft.patient_name, E::EmptyPatientName)?,
            phone: required(draft.phone, E::EmptyPhone)?,
            pickup_location: required(draft.pickup_location, E::EmptyPickupLocation)?,
            drop_location: required(draft.drop_location, E::EmptyDropLocation)?,
            emergency_type: required(draft.emergency_type, E::EmptyEmergencyType)?,
            notes: draft.notes.unwrap_or_default(),
        })
    }
}

impl NewBooking {
    /// Owning user, or `None` for anonymous bookings.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Patient name as submitted.
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Contact number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Where the ambulance collects the patient.
    pub fn pickup_location(&self) -> &str {
        &self.pickup_location
    }

    /// Destination, usually a hospital.
    pub fn drop_location(&self) -> &str {
        &self.drop_location
    }

    /// Free-text emergency category.
    pub fn emergency_type(&self) -> &str {
        &self.emergency_type
    }

    /// Optional notes; empty when none were sent.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Initial status of every new booking.
    pub const fn status(&self) -> BookingStatus {
        BookingStatus::Pending
    }
}

/// Booking counts per status. The four buckets always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub total: i64,
    pub pending: i64,
    pub dispatched: i64,
    pub completed: i64,
    pub cancelled: i64,
}

impl BookingStats {
    /// Tally statuses in memory. Adapters without an aggregate query use this.
    pub fn tally(statuses: impl IntoIterator<Item = BookingStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut stats, status| {
            stats.total += 1;
            match status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Dispatched => stats.dispatched += 1,
                BookingStatus::Completed => stats.completed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
            }
            stats
        })
    }
}
