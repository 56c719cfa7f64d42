//! Backend entry-point: wires settings, the store connection, and REST
//! endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use server::{create_server, ServerConfig, Settings};
use stockroom::inbound::http::health::HealthState;
use stockroom::outbound::persistence::{DbPool, PoolConfig};

/// Application bootstrap.
///
/// An unreachable store at boot is fatal: the process exits non-zero so an
/// orchestrator can restart it.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("configuration error: {e}")))?;
    let database_url = settings
        .database_url
        .clone()
        .ok_or_else(|| std::io::Error::other("STOCKROOM_DATABASE_URL must be set"))?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("failed to open connection pool: {e}")))?;
    pool.get()
        .await
        .map_err(|e| std::io::Error::other(format!("database unreachable at startup: {e}")))?;
    info!(port = settings.port, "database connection established");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), pool)
        .with_allowed_origin(settings.allowed_origin.clone());

    create_server(health_state, config)?.await
}
