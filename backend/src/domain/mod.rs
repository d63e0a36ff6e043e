//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed domain entities used by the API and
//! persistence layers. Types are transport agnostic; inbound adapters own
//! their wire DTOs and OpenAPI schemas.
//!
//! Public surface:
//! - Error / ErrorCode: failure envelope shared by every endpoint.
//! - LoginCredentials / SignupDetails: validated authentication input.
//! - UserAccount / AdminAccount and their authenticated projections.
//! - Booking / BookingStatus / BookingStats: booking lifecycle model.
//! - PasswordHasher / verify_stored_password: bcrypt plus legacy fallback.
//! - CredentialService / BookingService: implementations of the driving ports.
//! - TraceId: request correlation identifier.

pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod credential_service;
pub mod error;
pub mod password;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{CredentialValidationError, LoginCredentials, SignupDetails};
pub use self::booking::{
    Booking, BookingDraft, BookingId, BookingStats, BookingStatus, BookingValidationError,
    NewBooking, UnknownBookingStatus,
};
pub use self::booking_service::BookingService;
pub use self::credential_service::CredentialService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::password::{
    AccountKind, DEFAULT_BCRYPT_COST, PasswordError, PasswordHasher, StoredPasswordFormat,
    verify_stored_password,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AdminAccount, AdminId, AuthenticatedAdmin, AuthenticatedUser, NewUserAccount, UserAccount,
    UserId,
};
