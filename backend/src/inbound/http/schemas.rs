//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the serialised shape of their domain counterparts
//! and live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or the request is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The booking status is not one of the four known values.
    #[schema(rename = "invalid_status")]
    InvalidStatus,
    /// Unknown account or wrong password.
    #[schema(rename = "invalid_credentials")]
    InvalidCredentials,
    /// The resource does not exist or is not visible to the caller.
    #[schema(rename = "not_found")]
    NotFound,
    /// The email address is already registered.
    #[schema(rename = "duplicate_email")]
    DuplicateEmail,
    /// The booking is completed or cancelled.
    #[schema(rename = "invalid_transition")]
    InvalidTransition,
    /// Account creation failed.
    #[schema(rename = "signup_failed")]
    SignupFailed,
    /// Credential lookup or comparison failed.
    #[schema(rename = "login_failed")]
    LoginFailed,
    /// A booking read or write failed.
    #[schema(rename = "booking_failed")]
    BookingFailed,
    /// The request timed out.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`], the failure envelope.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false` for failures.
    #[schema(example = false)]
    success: bool,
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "All fields are required")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::BookingStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingStatus)]
pub enum BookingStatusSchema {
    #[schema(rename = "pending")]
    Pending,
    #[schema(rename = "dispatched")]
    Dispatched,
    #[schema(rename = "completed")]
    Completed,
    #[schema(rename = "cancelled")]
    Cancelled,
}

/// OpenAPI schema for [`crate::domain::Booking`]. Fields use column names.
#[derive(ToSchema)]
#[schema(as = crate::domain::Booking)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingSchema {
    #[schema(example = 42)]
    id: i64,
    /// Owning user, or null for anonymous bookings.
    #[schema(example = 7)]
    user_id: Option<i64>,
    #[schema(example = "Asha Rao")]
    patient_name: String,
    #[schema(example = "555-0101")]
    phone: String,
    #[schema(example = "4 Oak Road")]
    pickup_location: String,
    #[schema(example = "General Hospital")]
    drop_location: String,
    #[schema(example = "cardiac")]
    emergency_type: String,
    notes: String,
    status: BookingStatusSchema,
    /// RFC 3339 creation timestamp.
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T10:00:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::BookingStats`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingStats)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingStatsSchema {
    total: i64,
    pending: i64,
    dispatched: i64,
    completed: i64,
    cancelled: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_envelope_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        for field in ["success", "code", "message", "traceId", "details"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "invalid_status",
            "invalid_credentials",
            "not_found",
            "duplicate_email",
            "invalid_transition",
            "signup_failed",
            "login_failed",
            "booking_failed",
            "service_unavailable",
            "internal_error",
        ] {
            let serialised = serde_json::to_value(
                serde_json::from_value::<crate::domain::ErrorCode>(serde_json::json!(code))
                    .expect("domain knows the code"),
            )
            .expect("code serialises");
            assert_eq!(serialised, serde_json::json!(code));
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn booking_schema_uses_column_names() {
        let schema_json = schema_to_json::<BookingSchema>();
        assert_eq!(BookingSchema::name(), "crate.domain.Booking");
        for field in ["user_id", "patient_name", "pickup_location", "created_at"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn booking_status_schema_lists_lifecycle() {
        let schema_json = schema_to_json::<BookingStatusSchema>();
        for status in crate::domain::BookingStatus::ALL {
            assert!(schema_json.contains(status.as_str()), "missing {status}");
        }
    }
}
