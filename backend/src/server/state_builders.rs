//! Builders wiring Diesel repositories into the driving-port services.

use std::sync::Arc;

use ambulance_backend::domain::{BookingService, CredentialService, PasswordError, PasswordHasher};
use ambulance_backend::inbound::http::state::HttpState;
use ambulance_backend::outbound::persistence::{
    DbPool, DieselAdminRepository, DieselBookingRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Build handler state with database-backed services sharing one pool.
///
/// # Errors
/// Returns [`PasswordError::InvalidCost`] when the configured bcrypt cost is
/// outside the range bcrypt accepts.
pub(crate) fn build_http_state(config: &ServerConfig) -> Result<HttpState, PasswordError> {
    let hasher = PasswordHasher::new(config.bcrypt_cost)?;
    Ok(http_state_for_pool(&config.db_pool, hasher))
}

fn http_state_for_pool(pool: &DbPool, hasher: PasswordHasher) -> HttpState {
    let credentials = Arc::new(CredentialService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselAdminRepository::new(pool.clone())),
        hasher,
    ));
    let bookings = Arc::new(BookingService::new(Arc::new(DieselBookingRepository::new(
        pool.clone(),
    ))));
    HttpState::from_services(credentials, bookings)
}
