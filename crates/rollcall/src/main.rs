//! Rollcall server binary.
//!
//! Loads configuration, initializes logging, opens the roster backend, and
//! serves the HTTP API until Ctrl-C or SIGTERM.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`rollcall.yaml` + environment overrides)
//! 2. Initialize structured logging (tracing)
//! 3. Open the roster backend (connect + migrate for `PostgreSQL`)
//! 4. Serve HTTP until a shutdown signal arrives
//! 5. Close the backend

mod config;
mod error;

use std::sync::Arc;

use rollcall_db::{PostgresPool, Roster};
use rollcall_server::{AppState, shutdown_signal, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LoggingSection, StorageBackend};
use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the backend, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = AppConfig::load().map_err(AppError::from)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        host = config.server.host,
        port = config.server.port,
        backend = ?config.storage.backend,
        "rollcall starting"
    );

    // 3. Open the roster backend.
    let roster = open_roster(&config).await?;
    info!(backend = roster.backend_name(), "Roster backend ready");

    // 4. Serve until shutdown.
    let state = Arc::new(AppState::new(roster.clone()));
    let served = start_server(&config.server_config(), state, shutdown_signal())
        .await
        .map_err(AppError::from);

    // 5. Release the backend whether or not serving succeeded.
    roster.close().await;
    served?;

    info!("rollcall stopped");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Build the configured roster backend.
async fn open_roster(config: &AppConfig) -> Result<Roster, AppError> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = PostgresPool::connect(&config.postgres_config()).await?;
            pool.run_migrations().await?;
            Ok(Roster::Postgres(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory roster; all data is lost on exit");
            Ok(Roster::in_memory())
        }
    }
}
