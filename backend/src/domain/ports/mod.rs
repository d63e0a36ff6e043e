//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Service`, `*Command`, `*Query`) are called by inbound
//! adapters. Driven ports (`*Repository`) are implemented by outbound
//! adapters and return typed errors generated by `define_port_error!`.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_command;
mod booking_query;
mod booking_repository;
mod login_service;
mod signup_service;
mod user_repository;

#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::BookingCommand;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
pub use booking_query::BookingQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
#[cfg(test)]
pub use login_service::{MockAdminLoginService, MockLoginService};
pub use login_service::{AdminLoginService, LoginService};
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use user_repository::{MockAdminRepository, MockUserRepository};
pub use user_repository::{
    AdminPersistenceError, AdminRepository, UserPersistenceError, UserRepository,
};
