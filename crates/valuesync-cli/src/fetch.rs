//! Remote manifest retrieval over HTTP(S).
//!
//! The sole network boundary of the tool. One GET per manifest, bounded by
//! a fixed timeout, no retries; the first failure aborts the run.

use std::time::Duration;

use valuesync_common::error::{Result, SyncError};

/// Blocking HTTP fetcher with a fixed per-request timeout.
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Builds a fetcher whose requests all share `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Config` if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Fetch` on any transport, timeout, or HTTP-status
    /// failure, and `SyncError::Decode` when the body is not valid UTF-8.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::info!(url, "fetching manifest");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| SyncError::Fetch {
                url: url.to_string(),
                source: Box::new(e),
            })?;
        let body = response.bytes().map_err(|e| SyncError::Fetch {
            url: url.to_string(),
            source: Box::new(e),
        })?;
        String::from_utf8(body.to_vec()).map_err(|e| SyncError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
