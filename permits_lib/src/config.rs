//! Runtime configuration read from environment variables.

use std::time::Duration;

use permits_api::{Client, DEFAULT_BASE_URL, DEFAULT_DATASET};

/// Where to send queries and how long to wait for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Portal base URL (`PERMITS_API_URL`).
    pub api_url: String,
    /// Socrata dataset identifier (`PERMITS_DATASET`).
    pub dataset: String,
    /// Request timeout (`PERMITS_TIMEOUT_SECS`). `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_url: get("PERMITS_API_URL").unwrap_or(defaults.api_url),
            dataset: get("PERMITS_DATASET").unwrap_or(defaults.dataset),
            timeout: get("PERMITS_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!("Ignoring PERMITS_TIMEOUT_SECS={:?}: {}", raw, e);
                    None
                }
            }),
        }
    }

    /// Creates an API client for the configured endpoint.
    pub fn client(&self) -> Client {
        Client::with_base_url(&self.api_url)
            .with_dataset(&self.dataset)
            .with_timeout(self.timeout)
    }
}
