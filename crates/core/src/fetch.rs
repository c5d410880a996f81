//! HTML retrieval over HTTP.
//!
//! [`fetch_url`] returns errors for callers that want them; [`fetch_page`]
//! is the batch pipeline's view, where any failure is absorbed into an
//! empty [`Page`] so one unreachable document never aborts the run.

use std::time::Duration;

use reqwest::Client;
use tracing::warn;
use url::Url;

use crate::extract::{Page, extract_page};
use crate::{FoglineError, Result};

/// HTTP client configuration for fetching articles.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// Fetches the raw HTML of a URL.
///
/// Performs an HTTP GET with a browser-like User-Agent, follows redirects,
/// and maps a timed-out request to [`FoglineError::Timeout`].
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| FoglineError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(FoglineError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(FoglineError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                FoglineError::Timeout { timeout: config.timeout }
            } else {
                FoglineError::HttpError(e)
            }
        })?;

    let response = response.error_for_status()?;
    let content = response.text().await?;

    Ok(content)
}

/// Fetches a URL and extracts its title and body. Never fails: network or
/// HTTP errors are logged and absorbed into an empty page, which the
/// pipeline scores as all zeros.
pub async fn fetch_page(url: &str, config: &FetchConfig) -> Page {
    match fetch_url(url, config).await {
        Ok(html) => extract_page(&html),
        Err(e) => {
            warn!(url, error = %e, "fetch failed, substituting empty page");
            Page::empty()
        }
    }
}
