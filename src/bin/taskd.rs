//! HTTP server entry point for the Taskdeck task API.
//!
//! Startup sequence: install the tracing subscriber, load configuration from
//! the environment, build the bounded store connection pool, run the
//! idempotent schema migration once, then serve the task API until the
//! process is stopped.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use taskdeck::config::Config;
use taskdeck::http::{AppState, app};
use taskdeck::task::adapters::postgres::{PostgresTaskRepository, build_pool, ensure_schema};
use taskdeck::task::services::TaskService;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = build_pool(&config.database.url())?;

    let migration_pool = pool.clone();
    tokio::task::spawn_blocking(move || ensure_schema(&migration_pool)).await??;
    tracing::info!(database = %config.database.name, "schema ensured");

    let repository = PostgresTaskRepository::new(pool);
    let state = AppState::new(TaskService::new(Arc::new(repository)));

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.listen_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(port = config.listen_port, "server listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
