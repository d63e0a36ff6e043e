//! Backend entry-point: loads settings, prepares the store, and serves the
//! REST API with OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ambulance_backend::inbound::http::health::HealthState;
use ambulance_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use ambulance_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "failed to load .env file");
        }
    }

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let database_url = settings.database_url()?;

    let applied = run_pending_migrations(&database_url)
        .await
        .wrap_err("failed to apply database migrations")?;
    info!(applied, "database migrations complete");

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size))
        .await
        .wrap_err("failed to build database pool")?;
    pool.check_connection()
        .await
        .wrap_err("database is unreachable")?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new((settings.host.clone(), settings.port), pool)
        .with_request_timeout(settings.request_timeout())
        .with_bcrypt_cost(settings.bcrypt_cost);

    info!(
        host = %settings.host,
        port = settings.port,
        "starting HTTP server"
    );
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;

    health_state.mark_unhealthy();
    info!("HTTP server stopped");
    outcome.wrap_err("HTTP server failed")
}
