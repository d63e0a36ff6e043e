//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (accounts,
//!   bookings, admin, health)
//! - **Schemas**: request/response DTOs plus domain type wrappers
//!   ([`ErrorSchema`], [`BookingSchema`], ...) that provide OpenAPI
//!   definitions without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::admin::{StatsResponse, UpdateStatusRequest};
use crate::inbound::http::auth::{
    AdminLoginResponse, LoginRequest, LoginResponse, SignupRequest, SignupResponse,
};
use crate::inbound::http::bookings::{
    BookingCreatedResponse, BookingListResponse, CancelBookingRequest, CreateBookingRequest,
    MessageResponse,
};
use crate::inbound::http::schemas::{
    BookingSchema, BookingStatsSchema, BookingStatusSchema, ErrorCodeSchema, ErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ambulance booking API",
        description = "Account signup and login, ambulance bookings, and admin dispatch.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::admin_login,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::list_user_bookings,
        crate::inbound::http::bookings::cancel_booking,
        crate::inbound::http::admin::list_all_bookings,
        crate::inbound::http::admin::update_booking_status,
        crate::inbound::http::admin::booking_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        BookingSchema,
        BookingStatusSchema,
        BookingStatsSchema,
        SignupRequest,
        SignupResponse,
        LoginRequest,
        LoginResponse,
        AdminLoginResponse,
        CreateBookingRequest,
        BookingCreatedResponse,
        BookingListResponse,
        CancelBookingRequest,
        MessageResponse,
        UpdateStatusRequest,
        StatsResponse,
    )),
    tags(
        (name = "auth", description = "User signup and login, admin login"),
        (name = "bookings", description = "Booking creation, listing, and cancellation"),
        (name = "admin", description = "Dispatch operations across all bookings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI path registration and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const BOOKING_SCHEMA_NAME: &str = "crate.domain.Booking";
    const STATS_SCHEMA_NAME: &str = "crate.domain.BookingStats";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/signup")]
    #[case("/login")]
    #[case("/admin/login")]
    #[case("/book")]
    #[case("/user/bookings/{userId}")]
    #[case("/user/bookings/{bookingId}/cancel")]
    #[case("/admin/bookings")]
    #[case("/admin/bookings/{id}/status")]
    #[case("/admin/stats")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn openapi_booking_schema_uses_column_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let booking_schema = schemas.get(BOOKING_SCHEMA_NAME).expect("Booking schema");

        for field in ["id", "user_id", "patient_name", "status", "created_at"] {
            assert_object_schema_has_field(booking_schema, field);
        }
    }

    #[test]
    fn openapi_stats_schema_has_every_bucket() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let stats_schema = schemas.get(STATS_SCHEMA_NAME).expect("stats schema");

        for field in ["total", "pending", "dispatched", "completed", "cancelled"] {
            assert_object_schema_has_field(stats_schema, field);
        }
    }
}
