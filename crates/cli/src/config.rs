//! Runtime settings for the CLI.
//!
//! Resolution order: built-in defaults, then environment variables, then
//! command-line flags (applied by `main`).

use std::time::Duration;

use tracing::warn;

use api_client::{DEFAULT_ENDPOINT_URL, DEFAULT_REQUEST_TIMEOUT};

/// Environment variable overriding the service endpoint.
pub const ENDPOINT_ENV: &str = "ANI_RECS_ENDPOINT";

/// Environment variable overriding the request timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "ANI_RECS_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint_url: String,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    /// Apply optional overrides on top of `self`.
    ///
    /// A non-numeric timeout override is ignored with a warning rather
    /// than failing startup.
    fn with_overrides(mut self, endpoint: Option<String>, timeout_ms: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint_url = endpoint;
        }
        if let Some(raw) = timeout_ms {
            match raw.parse::<u64>() {
                Ok(ms) => self.request_timeout = Duration::from_millis(ms),
                Err(_) => warn!("ignoring non-numeric {}: {:?}", TIMEOUT_ENV, raw),
            }
        }
        self
    }
}

/// Settings from defaults plus the process environment.
pub fn load_settings() -> Settings {
    Settings::default().with_overrides(
        std::env::var(ENDPOINT_ENV).ok(),
        std::env::var(TIMEOUT_ENV).ok(),
    )
}
