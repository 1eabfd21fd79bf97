//! HTTP server for Folio.
//!
//! Serves the portfolio as server-rendered HTML, one route per navigation
//! page:
//!
//! | route            | page     |
//! |------------------|----------|
//! | `/`              | Home     |
//! | `/projects`      | Projects |
//! | `/skills`        | Skills   |
//! | `/blog?post=N`   | Blog     |
//! | `/contact`       | Contact  |
//!
//! Any other path is a 404.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     run_server(ServerConfig::default()).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use folio_config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use folio_fetch::Fetcher;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Portfolio document path.
    pub config_path: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8501,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// The portfolio document is loaded before binding, so a malformed document
/// stops startup.
///
/// # Errors
///
/// Returns an error if the document is malformed, the address is invalid, or
/// the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let loader = ConfigLoader::new();
    let loaded = loader.load(&config.config_path)?;
    for notice in &loaded.notices {
        tracing::warn!(path = %config.config_path.display(), notice = %notice, "Configuration notice");
    }

    let state = Arc::new(AppState {
        loader,
        config_path: config.config_path,
        source: Arc::new(Fetcher::new()),
        verbose: config.verbose,
        version: config.version,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_malformed_config_stops_startup() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "skills: [unclosed").unwrap();

        let err = run_server(ServerConfig {
            config_path: path,
            port: 0,
            ..ServerConfig::default()
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ServerError::Config(_)));
    }

    #[tokio::test]
    async fn test_invalid_host_is_rejected() {
        let tmp = TempDir::new().unwrap();

        let err = run_server(ServerConfig {
            host: "not a host".to_owned(),
            config_path: tmp.path().join("config.yaml"),
            ..ServerConfig::default()
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ServerError::Address(_)));
    }
}
