//! Remote content fetching for Folio.
//!
//! Blog posts may point at a README by URL instead of carrying their text
//! inline. [`Fetcher`] downloads such content with a bounded timeout and keeps
//! each URL's result for [`CACHE_TTL`].
//!
//! Failures never propagate to the caller: a failed fetch yields the text
//! `Error fetching content: {reason}` so the page can still be rendered.
//!
//! # Example
//!
//! ```no_run
//! use folio_fetch::{ContentSource, Fetcher};
//!
//! let fetcher = Fetcher::new();
//! let readme = fetcher.fetch("https://raw.githubusercontent.com/rust-lang/rust/master/README.md");
//! ```

mod consts;
mod fetcher;
mod transport;

pub use consts::{CACHE_TTL, DEFAULT_TIMEOUT, ERROR_PREFIX};
pub use fetcher::Fetcher;
pub use transport::{Transport, UreqTransport, create_agent};

/// Anything that can turn a URL into displayable text.
///
/// Implementations must not fail: errors are reported inside the returned text.
pub trait ContentSource: Send + Sync {
    /// Text for `url`.
    fn fetch(&self, url: &str) -> String;
}

/// Remote fetch error.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, timeout or protocol failure.
    #[error("{0}")]
    Http(#[from] ureq::Error),
    /// Server answered with an error status.
    #[error("{status} error for url: {url}")]
    Status { status: u16, url: String },
}
