//! HTTP client wrapper
//!
//! Every request carries the same `User-Agent`. The configured timeout
//! bounds each connect, read and write on the socket, not the whole
//! transfer, so a slow but steady tarball download is never cut short.
//! Error statuses are normalized: a JSON body's `message` field wins,
//! otherwise the URL, status, reason phrase and raw body are reported.

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::time::Duration;

pub const USER_AGENT: &str = "asdf-zls (https://github.com/zigcc/adsf-zls.git)";

/// Blocking GET client used for the index, the selection API and tarballs.
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self { agent, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.http_timeout)
    }

    /// Per-operation socket timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue a GET and return the successful response.
    pub fn get(&self, url: &str) -> Result<ureq::Response> {
        let result = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .call();

        match result {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => Err(status_error(url, status, response)),
            Err(ureq::Error::Transport(transport)) => Err(Error::Transport {
                url: url.to_string(),
                detail: transport.to_string(),
            }),
        }
    }

    /// GET `url` and decode the body as JSON.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self
            .get(url)?
            .into_string()
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                detail: format!("failed to read response: {}", e),
            })?;

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url: url.to_string(),
            detail: e.to_string(),
        })
    }

    /// GET `url` and hand back the body as a byte stream.
    pub fn get_reader(&self, url: &str) -> Result<Box<dyn Read + Send + Sync + 'static>> {
        Ok(self.get(url)?.into_reader())
    }
}

fn status_error(url: &str, status: u16, response: ureq::Response) -> Error {
    let reason = response.status_text().to_string();
    let is_json = response
        .header("content-type")
        .is_some_and(|ct| ct.contains("application/json"));
    let body = response
        .into_string()
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e));

    if is_json {
        if let Some(message) = json_message(&body) {
            return Error::Api {
                url: url.to_string(),
                status,
                message,
            };
        }
    }

    Error::Http {
        url: url.to_string(),
        status,
        reason,
        body,
    }
}

/// Extract the `message` string from a JSON error body, if there is one.
fn json_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}
