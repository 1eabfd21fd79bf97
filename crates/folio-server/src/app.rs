//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use folio_render::Page;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, pages::PageQuery};
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// One route per navigation page; everything else is a 404.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    for page in Page::ALL {
        router = router.route(
            &page.path(),
            get(
                move |State(state): State<Arc<AppState>>,
                      Query(query): Query<PageQuery>,
                      headers: HeaderMap| {
                    handlers::pages::get_page(page, state, query, headers)
                },
            ),
        );
    }

    router
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
