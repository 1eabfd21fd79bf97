//! Server error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_config::ConfigError;

/// Server error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration document could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Listener could not be bound or the server failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Host and port do not form a socket address.
    #[error("Invalid address: {0}")]
    Address(#[from] std::net::AddrParseError),

    /// Render task panicked or was cancelled.
    #[error("Render failed: {0}")]
    Render(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
