//! HTTP server configuration object and helpers.

use std::time::Duration;

use ambulance_backend::domain::DEFAULT_BCRYPT_COST;
use ambulance_backend::middleware::timeout::DEFAULT_REQUEST_TIMEOUT;
use ambulance_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) db_pool: DbPool,
    pub(crate) request_timeout: Duration,
    pub(crate) bcrypt_cost: u32,
}

impl ServerConfig {
    /// Construct a server configuration around a checked connection pool.
    #[must_use]
    pub fn new(bind_addr: (String, u16), db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Bound total request time.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Work factor for new password digests.
    #[must_use]
    pub fn with_bcrypt_cost(mut self, bcrypt_cost: u32) -> Self {
        self.bcrypt_cost = bcrypt_cost;
        self
    }
}
