//! Fetcher constants.

use std::time::Duration;

/// HTTP timeout for remote content requests (10 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long fetched content stays fresh (1 hour).
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Prefix of the text returned in place of content when a fetch fails.
pub const ERROR_PREFIX: &str = "Error fetching content: ";
