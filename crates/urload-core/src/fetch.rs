//! HTTP GET through libcurl.
//!
//! Commands only see the [`Fetcher`] trait so tests can swap in canned
//! responses; [`CurlFetcher`] is the real implementation.

use crate::config::{Settings, DEFAULT_TIMEOUT_SECS};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: u32 = 10;

const USER_AGENT: &str = concat!("urload/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {status} for url: {url}")]
    Status { url: String, status: u32 },
}

/// A completed response. The body is kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// URL the body came from, after redirects.
    pub url: String,
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    /// Converts a non-2xx response into [`FetchError::Status`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(FetchError::Status {
                url: self.url,
                status: self.status,
            })
        }
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one GET with the given extra request headers.
pub trait Fetcher {
    fn get(&self, url: &str, headers: &BTreeMap<String, String>) -> Result<Response, FetchError>;

    /// Picks up settings changed since the last call (e.g. `timeout_secs`).
    fn apply_settings(&mut self, _settings: &Settings) {}
}

/// Blocking fetcher backed by a fresh curl `Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl Fetcher for CurlFetcher {
    fn apply_settings(&mut self, settings: &Settings) {
        self.timeout = Duration::from_secs(settings.timeout_secs);
    }

    fn get(&self, url: &str, headers: &BTreeMap<String, String>) -> Result<Response, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(USER_AGENT)?;

        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let effective = easy
            .effective_url()?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());
        tracing::debug!(url, status, bytes = body.len(), "GET finished");

        Ok(Response {
            url: effective,
            status,
            body,
        })
    }
}
