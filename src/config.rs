//! Environment configuration, read once at process start.

use std::env;
use std::time::Duration;

/// Base URL of TheDogAPI, used when `DOGS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.thedogapi.com/v1";

/// Settings for the breeds API client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint URL, without a trailing slash.
    pub base_url: String,
    /// API key sent as `x-api-key`. Absence is non-fatal: requests go out
    /// unauthenticated and any rejection surfaces as an HTTP error.
    pub api_key: Option<String>,
    /// Whole-request timeout. `None` means no client-side timeout; an
    /// unresolved request then leaves its cache entry loading forever.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first if one
    /// exists.
    ///
    /// Recognized variables: `DOGS_API_KEY`, `DOGS_API_URL`,
    /// `DOGS_REQUEST_TIMEOUT_MS`. All of them are optional; unparseable
    /// timeout values are ignored.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            base_url: env::var("DOGS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: env::var("DOGS_API_KEY").ok().filter(|key| !key.is_empty()),
            request_timeout: env::var("DOGS_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .map(Duration::from_millis),
        }
    }

    /// Replaces the base URL. Tests use this to point at a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout: None,
        }
    }
}
