//! Cars API server entry-point.

mod server;

use std::ffi::OsString;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cars_backend::outbound::persistence::{
    DbPool, PoolConfig, run_pending_migrations,
};
use server::{AppSettings, ServerConfig, create_server};

/// Open the pool and bring the schema up to date.
async fn connect_database(settings: &AppSettings, url: &str) -> Result<DbPool> {
    let migration_url = url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .wrap_err("migration task panicked")?
        .wrap_err("failed to migrate database")?;

    let config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
    DbPool::new(config).wrap_err("failed to create database pool")
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("CARS_HOST must be an IP address")?;

    let mut config = ServerConfig::new(bind_addr).with_fixture_cars(settings.seed_fixture_cars);
    if let Some(url) = settings.database_url() {
        let pool = connect_database(&settings, url).await?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "starting cars server");
    create_server(config)?.await?;
    Ok(())
}
