//! Client configuration.

use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Medusa client configuration.
///
/// Built via [`MedusaBuilder`] and immutable afterwards; the client never
/// mutates it and it is safe to clone across callers.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
}

impl Config {
    /// Get the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key, if one was configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for the Medusa client.
#[derive(Debug)]
pub struct MedusaBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl MedusaBuilder {
    /// Create a new builder pointed at the given backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Set the API key, sent as a bearer token on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub(crate) fn build_config(self) -> Result<Config, crate::Error> {
        if self.base_url.is_empty() {
            return Err(crate::Error::Config("base_url cannot be empty".into()));
        }

        // Paths always start with '/', so strip any trailing slash here.
        let base_url = self.base_url.trim_end_matches('/').to_owned();

        Ok(Config {
            base_url,
            api_key: self.api_key,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
