//! Backend entry-point: loads settings, prepares the store and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use habits_backend::config::AppSettings;
use habits_backend::inbound::http::health::HealthState;
use habits_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server};

/// Open the pool and bring the schema up to date.
async fn connect(database_url: &str, max_connections: u32) -> std::io::Result<DbPool> {
    run_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(max_connections))
        .await
        .map_err(std::io::Error::other)?;
    info!(max_connections, "database pool ready");
    Ok(pool)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, settings.static_dir())
        .with_demo_data(settings.seed_demo_data);
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect(url, settings.db_max_connections()).await?);
    }
    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(Some(server::build_metrics()?));
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    actix_web::rt::spawn(server::drain_on(
        tokio::signal::ctrl_c(),
        health_state,
        server.handle(),
    ));
    info!(%bind_addr, "habit tracker listening");
    server.await
}
