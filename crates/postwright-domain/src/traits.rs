//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its
//! external collaborators. Infrastructure implementations live in the
//! provider crates; tests substitute deterministic mocks.

use crate::{CompletionRequest, Query, SearchResults};
use async_trait::async_trait;
use url::Url;

/// Trait for web search providers
///
/// Implemented by the infrastructure layer (postwright-search)
#[async_trait]
pub trait SearchProvider {
    /// Error type for search operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute one search query and return the provider's response
    async fn search(&self, query: &Query) -> Result<SearchResults, Self::Error>;
}

/// Trait for LLM completion providers
///
/// Implemented by the infrastructure layer (postwright-llm)
#[async_trait]
pub trait LlmProvider {
    /// Error type for completion operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a text completion for one prompt
    async fn complete(&self, request: CompletionRequest) -> Result<String, Self::Error>;
}

/// Trait for fetching a web page as plain text
///
/// Implemented by the infrastructure layer (postwright-scraper)
#[async_trait]
pub trait PageFetcher {
    /// Error type for fetch operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one page and reduce it to plain text
    async fn fetch_text(&self, url: &Url) -> Result<String, Self::Error>;
}
