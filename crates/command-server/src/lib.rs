//! Server wiring for the command resource service.
//!
//! [`cli`] declares the flags and environment variables, [`run`] opens the
//! database, applies migrations, serves until Ctrl+C or SIGTERM and then
//! closes the pool.

pub mod cli;

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use command_api::{serve, ApiConfig, AppState};
use command_persistence::CommandStore;

use crate::cli::Cli;

/// Loads `.env.local` from `dir`, falling back to `.env`.
///
/// Returns the file that was loaded, or `None` when neither exists. A file
/// that exists but cannot be read or parsed is an error.
pub fn load_env_files(dir: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    for name in [".env.local", ".env"] {
        let path = dir.join(name);
        match dotenvy::from_path(&path) {
            Ok(()) => return Ok(Some(path)),
            Err(e) if e.not_found() => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// Initializes tracing. `RUST_LOG` takes precedence over `-v` flags.
pub fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Runs the server until a shutdown signal arrives.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = CommandStore::connect(&cli.database_url, cli.max_connections).await?;
    store.migrate().await?;

    let config = ApiConfig::new(cli.host.clone(), cli.port).with_cors_origins(&cli.cors_origin);
    let state = AppState::new(config.clone(), store.clone());

    let result = serve(config, state, shutdown_signal()).await;

    info!("Closing command database");
    store.close().await;

    result?;
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
