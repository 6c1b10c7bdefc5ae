//! Postwright Content Extraction Layer
//!
//! Fetches the pages behind selected URLs and reduces them to plain
//! text documents. This is the only stage with per-item partial-failure
//! isolation: one URL failing must never abort the batch, so the
//! extractor always returns one [`postwright_domain::Document`] per
//! input URL, in input order, with failures recorded on the document.

#![warn(missing_docs)]

mod error;
mod extract;
mod fetcher;
mod html;

use async_trait::async_trait;
use postwright_domain::traits::PageFetcher;
use std::collections::{HashMap, HashSet};
use url::Url;

pub use error::FetchError;
pub use extract::{ContentExtractor, DEFAULT_CONCURRENCY};
pub use fetcher::HttpPageFetcher;
pub use html::html_to_text;

/// Mock page fetcher for deterministic testing
///
/// Serves configured page text per URL; unknown URLs and URLs marked
/// failing return errors, without any network access.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
}

impl MockFetcher {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` for `url`
    pub fn add_page(&mut self, url: &str, text: impl Into<String>) {
        self.pages.insert(url.to_string(), text.into());
    }

    /// Fail fetches of `url`
    pub fn fail_url(&mut self, url: &str) {
        self.failing.insert(url.to_string());
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    type Error = FetchError;

    async fn fetch_text(&self, url: &Url) -> Result<String, Self::Error> {
        let key = url.as_str();
        if self.failing.contains(key) {
            return Err(FetchError::Status {
                status: 503,
                url: key.to_string(),
            });
        }
        self.pages.get(key).cloned().ok_or_else(|| FetchError::Status {
            status: 404,
            url: key.to_string(),
        })
    }
}
