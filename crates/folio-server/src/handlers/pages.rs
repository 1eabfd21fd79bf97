//! Page endpoints.
//!
//! Every navigation entry is served as a complete HTML document with
//! `ETag` based conditional responses.

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use folio_render::{Page, Session};
use md5::{Digest, Md5};
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters accepted by page routes.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    /// Selected blog post index.
    post: Option<String>,
}

impl PageQuery {
    /// Selected post, `0` when missing or not a number.
    fn post_index(&self) -> usize {
        self.post
            .as_deref()
            .and_then(|post| post.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Handle GET for one of the navigation pages.
#[allow(clippy::needless_pass_by_value)]
pub(crate) async fn get_page(
    page: Page,
    state: Arc<AppState>,
    query: PageQuery,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let session = Session::new(page).with_post(query.post_index());

    let render_state = Arc::clone(&state);
    let html = tokio::task::spawn_blocking(move || render_state.render(&session)).await??;

    let etag = compute_etag(&state.version, &html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
