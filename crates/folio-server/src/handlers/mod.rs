//! HTTP request handlers.

pub(crate) mod pages;

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Fallback for paths outside the navigation.
pub(crate) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
