//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags and `AMBULANCE_*` environment variables.
//! `main` loads an optional `.env` file first, so entries there behave like
//! real environment variables.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::DEFAULT_BCRYPT_COST;
use crate::middleware::timeout::DEFAULT_REQUEST_TIMEOUT;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
/// Unprefixed variable honoured when `AMBULANCE_DATABASE_URL` is unset.
pub const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Settings that cannot be turned into a runnable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("no database URL: set AMBULANCE_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Configuration values for the HTTP service and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AMBULANCE")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Interface the listener binds to.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// Port the listener binds to.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Upper bound on pooled store connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
    /// Total time a request may take before it fails with 503.
    #[ortho_config(default = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub request_timeout_secs: u64,
    /// bcrypt work factor for new password digests.
    #[ortho_config(default = DEFAULT_BCRYPT_COST)]
    pub bcrypt_cost: u32,
}

impl AppSettings {
    /// Resolve the database URL, falling back to the unprefixed
    /// `DATABASE_URL` variable used by Diesel tooling.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(FALLBACK_DATABASE_URL_VAR).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Request bound as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
