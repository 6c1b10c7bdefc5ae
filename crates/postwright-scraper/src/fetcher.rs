//! HTTP page fetching

use crate::error::FetchError;
use crate::html::html_to_text;
use async_trait::async_trait;
use postwright_domain::traits::PageFetcher;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default timeout for a single page fetch (20 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Default cap on extracted text per page
pub const DEFAULT_MAX_TEXT_CHARS: usize = 20_000;

/// Fetches web pages and reduces them to plain text
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_text_chars: usize,
}

impl HttpPageFetcher {
    /// Create a fetcher with default settings
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent("Mozilla/5.0 (compatible; Postwright/0.1)")
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }

    /// Cap extracted text at `max_text_chars`
    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// Whether a URL may be fetched at all
    ///
    /// Only http(s) against public hosts; localhost, loopback, link-local
    /// and RFC 1918 ranges are refused.
    pub fn is_safe_url(url: &Url) -> bool {
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        let host = match url.host_str() {
            Some(host) => host.to_lowercase(),
            None => return false,
        };

        if host == "localhost" || host == "127.0.0.1" || host == "0.0.0.0" {
            return false;
        }
        if host.starts_with("10.") || host.starts_with("192.168.") || host.starts_with("169.254.") {
            return false;
        }
        if let Some(rest) = host.strip_prefix("172.") {
            if let Some(second) = rest.split('.').next().and_then(|s| s.parse::<u8>().ok()) {
                if (16..=31).contains(&second) {
                    return false;
                }
            }
        }

        true
    }

    fn truncate(&self, text: String) -> String {
        if text.len() <= self.max_text_chars {
            return text;
        }
        // Cut at the last line boundary under the cap so chunking still
        // sees whole lines
        let truncated = &text[..floor_char_boundary(&text, self.max_text_chars)];
        match truncated.rfind('\n') {
            Some(pos) => truncated[..pos].to_string(),
            None => truncated.to_string(),
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    type Error = FetchError;

    async fn fetch_text(&self, url: &Url) -> Result<String, Self::Error> {
        if !Self::is_safe_url(url) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        debug!(url = %url, "Fetching page");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let text = self.truncate(html_to_text(&html));
        if text.trim().is_empty() {
            return Err(FetchError::NoContent(url.to_string()));
        }

        debug!(url = %url, chars = text.len(), "Page reduced to text");
        Ok(text)
    }
}
