//! Chart page download
//!
//! The chart site rejects requests that do not look like a desktop browser,
//! so every request carries a browser User-Agent.

use std::time::Duration;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Desktop Chrome identification sent with every request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for chart pages
pub struct ChartClient {
    http_client: reqwest::Client,
}

impl ChartClient {
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ScrapeError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// GET `url` and return the body as text
    ///
    /// Any non-success status is an error.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status.as_u16(), url.to_string()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
