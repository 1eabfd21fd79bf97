//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use folio_config::{ConfigError, ConfigLoader};
use folio_fetch::ContentSource;
use folio_render::{Session, render_page};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Memoized loader for the portfolio document.
    pub(crate) loader: ConfigLoader,
    /// Path of the portfolio document.
    pub(crate) config_path: PathBuf,
    /// Source for remote blog content.
    pub(crate) source: Arc<dyn ContentSource>,
    /// Log config notices on every request.
    pub(crate) verbose: bool,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

impl AppState {
    /// Render the full page for `session`.
    ///
    /// Blocks while remote content is fetched.
    pub(crate) fn render(&self, session: &Session) -> Result<String, ConfigError> {
        let config = self.loader.load(&self.config_path)?;

        if self.verbose {
            for notice in &config.notices {
                tracing::warn!(path = %self.config_path.display(), notice = %notice, "Configuration notice");
            }
        }

        Ok(render_page(&config, session, self.source.as_ref()))
    }
}
