//! Keyed memoization with optional time-to-live.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// A value together with the instant it was computed.
struct Stored<V> {
    value: V,
    stored_at: Instant,
}

/// One cache entry. Empty while its value is being computed.
struct Slot<V> {
    cell: OnceLock<Stored<V>>,
}

impl<V> Slot<V> {
    fn empty() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    fn filled(value: V, stored_at: Instant) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Stored { value, stored_at });
        Self { cell }
    }
}

/// Thread-safe memo keyed by `K`.
///
/// Without a TTL, entries live as long as the memo. With a TTL, an entry is
/// fresh until `ttl` has elapsed since it was stored; the next lookup after
/// that computes the value again.
///
/// [`get_or_insert_with`](Self::get_or_insert_with) is single-flight per key:
/// callers that arrive while a value is being computed wait for that
/// computation instead of starting their own. The internal map lock is never
/// held while a value is computed.
pub struct Memo<K, V> {
    ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
    slots: Mutex<HashMap<K, Arc<Slot<V>>>>,
}

impl<K, V> std::fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl<K: Eq + Hash, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    /// Create a memo whose entries never expire.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ttl: None,
            clock: Arc::new(SystemClock),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Create a memo whose entries expire `ttl` after being stored.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::new()
        }
    }

    /// Replace the time source used for expiry.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Configured time-to-live, if any.
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Return the fresh value stored for `key`.
    ///
    /// Returns `None` when the key is absent, still being computed, or expired.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = Arc::clone(self.lock().get(key)?);
        let stored = slot.cell.get()?;
        if self.is_expired(stored) {
            return None;
        }
        Some(stored.value.clone())
    }

    /// Store `value` for `key`, replacing any previous entry.
    pub fn insert(&self, key: K, value: V) {
        let slot = Arc::new(Slot::filled(value, self.clock.now()));
        self.lock().insert(key, slot);
    }

    /// Return the fresh value for `key`, computing it with `f` on a miss.
    pub fn get_or_insert_with<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        let slot = {
            let mut slots = self.lock();
            match slots.get(&key) {
                Some(slot) if !self.slot_expired(slot) => Arc::clone(slot),
                _ => {
                    let slot = Arc::new(Slot::empty());
                    slots.insert(key, Arc::clone(&slot));
                    slot
                }
            }
        };

        let stored = slot.cell.get_or_init(|| Stored {
            value: f(),
            stored_at: self.clock.now(),
        });
        stored.value.clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Arc<Slot<V>>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// In-flight slots are never expired.
    fn slot_expired(&self, slot: &Slot<V>) -> bool {
        slot.cell.get().is_some_and(|stored| self.is_expired(stored))
    }

    fn is_expired(&self, stored: &Stored<V>) -> bool {
        let Some(ttl) = self.ttl else {
            return false;
        };
        let age = self.clock.now().saturating_duration_since(stored.stored_at);
        let expired = age >= ttl;
        if expired {
            tracing::trace!(age_secs = age.as_secs(), "memo entry expired");
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ManualClock;

    const HOUR: Duration = Duration::from_secs(3600);

    fn ttl_memo(clock: &Arc<ManualClock>) -> Memo<String, String> {
        Memo::with_ttl(HOUR).with_clock(Arc::clone(clock) as Arc<dyn Clock>)
    }

    #[test]
    fn test_get_on_empty_memo_misses() {
        let memo: Memo<String, u32> = Memo::new();
        assert_eq!(memo.get("missing"), None);
    }

    #[test]
    fn test_insert_then_get_hits() {
        let memo = Memo::new();
        memo.insert("a".to_owned(), 1);
        assert_eq!(memo.get("a"), Some(1));
    }

    #[test]
    fn test_get_borrows_path_keys() {
        let memo: Memo<PathBuf, &str> = Memo::new();
        memo.insert(PathBuf::from("config.yaml"), "doc");
        assert_eq!(memo.get(Path::new("config.yaml")), Some("doc"));
    }

    #[test]
    fn test_get_or_insert_with_computes_once_without_ttl() {
        let memo = Memo::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            "value".to_owned()
        };

        let first = memo.get_or_insert_with("k".to_owned(), compute);
        let second = memo.get_or_insert_with("k".to_owned(), compute);

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_entry_fresh_inside_window() {
        let clock = Arc::new(ManualClock::new());
        let memo = ttl_memo(&clock);
        memo.insert("url".to_owned(), "body".to_owned());

        clock.advance(HOUR - Duration::from_secs(1));

        assert_eq!(memo.get("url"), Some("body".to_owned()));
    }

    #[test]
    fn test_entry_expires_after_window() {
        let clock = Arc::new(ManualClock::new());
        let memo = ttl_memo(&clock);
        memo.insert("url".to_owned(), "body".to_owned());

        clock.advance(HOUR);

        assert_eq!(memo.get("url"), None);
    }

    #[test]
    fn test_expired_entry_is_recomputed() {
        let clock = Arc::new(ManualClock::new());
        let memo = ttl_memo(&clock);

        let first = memo.get_or_insert_with("url".to_owned(), || "v1".to_owned());
        clock.advance(Duration::from_secs(30 * 60));
        let cached = memo.get_or_insert_with("url".to_owned(), || "v2".to_owned());
        clock.advance(Duration::from_secs(31 * 60));
        let refreshed = memo.get_or_insert_with("url".to_owned(), || "v3".to_owned());

        assert_eq!(first, "v1");
        assert_eq!(cached, "v1");
        assert_eq!(refreshed, "v3");
    }

    #[test]
    fn test_window_restarts_from_refresh() {
        let clock = Arc::new(ManualClock::new());
        let memo = ttl_memo(&clock);

        memo.get_or_insert_with("url".to_owned(), || "v1".to_owned());
        clock.advance(HOUR);
        memo.get_or_insert_with("url".to_owned(), || "v2".to_owned());
        clock.advance(HOUR - Duration::from_secs(1));

        assert_eq!(memo.get("url"), Some("v2".to_owned()));
    }

    #[test]
    fn test_keys_are_independent() {
        let memo = Memo::new();
        memo.insert("a".to_owned(), 1);
        memo.insert("b".to_owned(), 2);

        assert_eq!(memo.get("a"), Some(1));
        assert_eq!(memo.get("b"), Some(2));
    }

    #[test]
    fn test_concurrent_callers_share_one_computation() {
        const THREADS: usize = 8;
        let memo: Memo<String, String> = Memo::with_ttl(HOUR);
        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let results: Vec<String> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        memo.get_or_insert_with("same".to_owned(), || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(50));
                            "shared".to_owned()
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r == "shared"));
    }
}
