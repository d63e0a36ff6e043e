//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the driven repository ports, backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Lifecycle rules live in the domain services.
//! - **Internal models**: row structs (`models.rs`) and `schema.rs` never
//!   leave this module.
//! - **Strongly typed errors**: Diesel and pool failures map to the port
//!   error enums; raw database text is logged, not propagated.
//!
//! # Example
//!
//! ```no_run
//! use ambulance_backend::outbound::persistence::{DbPool, DieselBookingRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/ambulance")).await?;
//! let bookings = DieselBookingRepository::new(pool);
//! # let _ = bookings;
//! # Ok(())
//! # }
//! ```

mod diesel_admin_repository;
mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_admin_repository::DieselAdminRepository;
pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
