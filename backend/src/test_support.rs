//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with the
//! `test-support` feature.

pub mod memory_store;

pub use memory_store::MemoryStore;

pub mod app {
    //! Full application wiring over the in-memory store.
    //!
    //! Mirrors the production app: trace middleware outermost, the request
    //! timeout inside it, every API route, and the health checks.

    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::body::BoxBody;
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::{App, web};

    use crate::domain::{BookingService, CredentialService, PasswordHasher};
    use crate::inbound::http::configure;
    use crate::inbound::http::health::{HealthState, live, ready};
    use crate::inbound::http::state::HttpState;
    use crate::middleware::{RequestTimeout, Trace};

    use super::MemoryStore;

    /// Lowest cost bcrypt accepts; keeps hashing fast in tests.
    pub const TEST_BCRYPT_COST: u32 = 4;

    /// Handler state backed by real services over `store`.
    pub fn memory_state(store: Arc<MemoryStore>) -> HttpState {
        let hasher = match PasswordHasher::new(TEST_BCRYPT_COST) {
            Ok(hasher) => hasher,
            Err(err) => panic!("test bcrypt cost rejected: {err}"),
        };
        let credentials = Arc::new(CredentialService::new(store.clone(), store.clone(), hasher));
        let bookings = Arc::new(BookingService::new(store));
        HttpState::from_services(credentials, bookings)
    }

    /// Build the application over `store` with the given request timeout.
    pub fn memory_app(
        store: Arc<MemoryStore>,
        request_timeout: Duration,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<BoxBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();

        App::new()
            .app_data(health)
            .app_data(web::Data::new(memory_state(store)))
            .wrap(RequestTimeout::new(request_timeout))
            .wrap(Trace)
            .configure(configure)
            .service(ready)
            .service(live)
    }
}
