//! Runtime configuration
//!
//! Built once by the CLI (from flags or `ASDF_ZLS_*` environment variables)
//! and passed by reference to everything that talks to the network.

use std::time::Duration;

/// Default version index location
pub const DEFAULT_INDEX_URL: &str = "https://builds.zigtools.org/index.json";

/// Default base of the release selection API
pub const DEFAULT_RELEASES_URL: &str = "https://releases.zigtools.org";

/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub index_url: String,
    pub releases_url: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    /// Trailing slashes are dropped so paths can be appended directly.
    pub fn with_releases_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.releases_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }
}
