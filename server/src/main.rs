//! Pet adoption web service.
//!
//! Serves server-rendered pages to list, add, adopt and delete pets kept in a
//! DuckDB file.
//!
//! Usage:
//!   petstore --port 5000 --data-dir /var/lib/petstore

use std::net::SocketAddr;
use anyhow::{Context, Result};
use clap::Parser;
use petstore_server::{AppState, Config, Views, build_router, connect_store};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    let log_level = if config.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Pet adoption service starting...");
    let store = connect_store(&config.db_path());
    let views = Views::new().context("Failed to load page templates")?;
    let app = build_router(AppState::new(store, views));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", config.port))?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
