//! Memoization layer for Folio.
//!
//! This crate provides one generic cache abstraction, [`Memo`], that backs
//! every cache in the workspace:
//!
//! - the configuration memo (keyed by file path, never expires)
//! - the remote content memo (keyed by URL, expires after a fixed window)
//!
//! Time is read through the [`Clock`] trait so expiry can be driven by tests.
//! Enable the `mock` feature to get [`ManualClock`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use folio_cache::Memo;
//!
//! let memo: Memo<String, String> = Memo::with_ttl(Duration::from_secs(3600));
//! let first = memo.get_or_insert_with("key".to_owned(), || "computed".to_owned());
//! let second = memo.get_or_insert_with("key".to_owned(), || unreachable!());
//! assert_eq!(first, second);
//! ```

mod clock;
mod memo;

#[cfg(any(test, feature = "mock"))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use memo::Memo;
