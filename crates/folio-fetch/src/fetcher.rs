//! Cached fetcher.

use std::sync::Arc;
use std::time::Instant;

use folio_cache::{Clock, Memo};

use crate::consts::{CACHE_TTL, DEFAULT_TIMEOUT, ERROR_PREFIX};
use crate::transport::{Transport, UreqTransport};
use crate::ContentSource;

/// Fetches remote text and caches it per URL for [`CACHE_TTL`].
///
/// Failed fetches produce an error message that is cached like any other
/// result, so a broken URL is retried at most once per window.
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    memo: Memo<String, String>,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a fetcher using HTTP with the default 10 second timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(UreqTransport::new(DEFAULT_TIMEOUT)))
    }

    /// Create a fetcher over a custom transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            memo: Memo::with_ttl(CACHE_TTL),
        }
    }

    /// Replace the clock used for cache expiry.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.memo = Memo::with_ttl(CACHE_TTL).with_clock(clock);
        self
    }

    fn fetch_uncached(&self, url: &str) -> String {
        tracing::debug!(url = %url, "loading content");
        let started = Instant::now();

        match self.transport.get(url) {
            Ok(body) => {
                tracing::info!(
                    url = %url,
                    bytes = body.len(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "fetched remote content"
                );
                body
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "remote content fetch failed");
                format!("{ERROR_PREFIX}{err}")
            }
        }
    }
}

impl ContentSource for Fetcher {
    fn fetch(&self, url: &str) -> String {
        self.memo
            .get_or_insert_with(url.to_owned(), || self.fetch_uncached(url))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    use folio_cache::ManualClock;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FetchError;

    /// Transport that counts calls and answers from a fixed script.
    struct CountingTransport {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingTransport {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: true,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transport for CountingTransport {
        fn get(&self, url: &str) -> Result<String, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                return Err(FetchError::Status {
                    status: 503,
                    url: url.to_owned(),
                });
            }
            Ok(format!("# {url} (fetch {n})"))
        }
    }

    fn fetcher_with(transport: &Arc<CountingTransport>, clock: &Arc<ManualClock>) -> Fetcher {
        Fetcher::with_transport(Arc::clone(transport) as Arc<dyn Transport>)
            .with_clock(Arc::clone(clock) as Arc<dyn Clock>)
    }

    #[test]
    fn test_second_fetch_within_window_is_cached() {
        let transport = CountingTransport::ok();
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher_with(&transport, &clock);

        let first = fetcher.fetch("https://x/readme");
        clock.advance(Duration::from_secs(59 * 60));
        let second = fetcher.fetch("https://x/readme");

        assert_eq!(first, second);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_fetch_after_window_goes_to_network() {
        let transport = CountingTransport::ok();
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher_with(&transport, &clock);

        let first = fetcher.fetch("https://x/readme");
        clock.advance(CACHE_TTL + Duration::from_secs(1));
        let second = fetcher.fetch("https://x/readme");

        assert_eq!(transport.calls(), 2);
        assert_eq!(first, "# https://x/readme (fetch 1)");
        assert_eq!(second, "# https://x/readme (fetch 2)");
    }

    #[test]
    fn test_urls_are_cached_separately() {
        let transport = CountingTransport::ok();
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher_with(&transport, &clock);

        fetcher.fetch("https://x/a");
        fetcher.fetch("https://x/b");
        fetcher.fetch("https://x/a");

        assert_eq!(transport.calls(), 2);
    }

    #[test]
    fn test_failure_becomes_error_text() {
        let transport = CountingTransport::failing();
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher_with(&transport, &clock);

        let text = fetcher.fetch("https://x/missing");

        assert_eq!(
            text,
            "Error fetching content: 503 error for url: https://x/missing"
        );
    }

    #[test]
    fn test_failure_is_cached_for_window() {
        let transport = CountingTransport::failing();
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher_with(&transport, &clock);

        fetcher.fetch("https://x/missing");
        fetcher.fetch("https://x/missing");

        assert_eq!(transport.calls(), 1);
    }

    /// Serve one HTTP response per connection from a background thread.
    fn serve(response: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
                    line.clear();
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        addr
    }

    /// Accept connections and never answer.
    fn black_hole() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming() {
                held.push(stream);
            }
        });
        addr
    }

    #[test]
    fn test_ureq_transport_returns_body_verbatim() {
        let addr = serve(
            "HTTP/1.1 200 OK\r\nContent-Length: 17\r\nConnection: close\r\n\r\n# Title\n\n<b>x</b>",
        );
        let fetcher = Fetcher::new();

        let text = fetcher.fetch(&format!("http://{addr}/README.md"));

        assert_eq!(text, "# Title\n\n<b>x</b>");
    }

    #[test]
    fn test_ureq_transport_reports_error_status() {
        let addr = serve("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let fetcher = Fetcher::new();
        let url = format!("http://{addr}/missing");

        let text = fetcher.fetch(&url);

        assert_eq!(text, format!("Error fetching content: 404 error for url: {url}"));
    }

    #[test]
    fn test_ureq_transport_times_out() {
        let addr = black_hole();
        let fetcher = Fetcher::with_transport(Arc::new(UreqTransport::new(
            Duration::from_millis(200),
        )));

        let started = Instant::now();
        let text = fetcher.fetch(&format!("http://{addr}/fails"));

        assert!(text.starts_with(ERROR_PREFIX), "got: {text}");
        assert!(text.len() > ERROR_PREFIX.len());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_ureq_transport_connection_refused() {
        // Bind then drop to get a port with nothing listening.
        let addr = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let fetcher = Fetcher::new();

        let text = fetcher.fetch(&format!("http://{addr}/"));

        assert!(text.starts_with(ERROR_PREFIX), "got: {text}");
    }
}
