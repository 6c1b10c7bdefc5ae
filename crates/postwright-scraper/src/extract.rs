//! Batch content extraction with per-URL failure isolation

use futures::stream::{self, StreamExt};
use postwright_domain::traits::PageFetcher;
use postwright_domain::Document;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// Default number of pages fetched concurrently
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Turns a list of URLs into one document per URL
///
/// URLs are fetched concurrently (bounded), but the returned sequence
/// always matches the input order. A failing URL yields a document
/// marked failed; it never aborts the batch.
pub struct ContentExtractor<F> {
    fetcher: Arc<F>,
    concurrency: usize,
}

impl<F> ContentExtractor<F>
where
    F: PageFetcher + Send + Sync,
{
    /// Create an extractor over the given fetcher
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Set how many pages are fetched concurrently
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fetch and reduce every URL, one document per URL, input order
    pub async fn extract(&self, urls: &[Url]) -> Vec<Document> {
        let documents: Vec<Document> = stream::iter(urls.iter().cloned().map(|url| {
            let fetcher = Arc::clone(&self.fetcher);
            async move {
                match fetcher.fetch_text(&url).await {
                    Ok(text) => {
                        info!(url = %url, chars = text.len(), "Page extracted");
                        Document::fetched(url, text)
                    }
                    Err(e) => {
                        warn!(url = %url, error = %e, "Page extraction failed");
                        Document::failed(url, e.to_string())
                    }
                }
            }
        }))
        .buffered(self.concurrency)
        .collect()
        .await;

        let failed = documents.iter().filter(|d| d.is_failed()).count();
        info!(
            total = documents.len(),
            failed, "Content extraction complete"
        );

        documents
    }
}
