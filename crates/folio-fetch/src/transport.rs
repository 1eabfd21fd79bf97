//! HTTP transport.

use std::time::Duration;

use ureq::Agent;

use crate::FetchError;

/// Performs a single GET and returns the body as text.
pub trait Transport: Send + Sync {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, timeout or an error status.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Create an HTTP agent with the given global timeout.
///
/// Error statuses are returned as responses so the caller can report them
/// with the URL attached.
#[must_use]
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// [`Transport`] backed by a pooled `ureq` agent.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Create a transport whose requests time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: create_agent(timeout),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.agent.get(url).call()?;

        // Redirects are followed by the agent, so anything below 400 is content.
        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Status {
                status,
                url: url.to_owned(),
            });
        }

        Ok(response.into_body().read_to_string()?)
    }
}
