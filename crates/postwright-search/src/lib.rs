//! Postwright Search Provider Layer
//!
//! Implementations of the `SearchProvider` trait from `postwright-domain`.
//!
//! # Providers
//!
//! - `MockSearch`: Deterministic mock for testing
//! - `SerperClient`: Serper (Google Search) API over HTTP

#![warn(missing_docs)]

pub mod serper;

use async_trait::async_trait;
use postwright_domain::traits::SearchProvider;
use postwright_domain::{Query, SearchResults};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use serper::SerperClient;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// The provider answered with a non-success HTTP status
    #[error("Search provider returned HTTP {status}: {body}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Network or transport failure
    #[error("Search request failed: {0}")]
    Request(String),

    /// Rate limit still exceeded after bounded retries
    #[error("Search rate limit exceeded")]
    RateLimited,

    /// The 2xx response body was not valid JSON
    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Mock search provider for deterministic testing
///
/// Returns a pre-configured response or error without network calls.
#[derive(Debug, Clone)]
pub struct MockSearch {
    response: serde_json::Value,
    fail_with_status: Option<u16>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSearch {
    /// Create a mock returning the given raw response for every query
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            response,
            fail_with_status: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock that fails every query with the given HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            response: serde_json::Value::Null,
            fail_with_status: Some(status),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `search` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    type Error = SearchError;

    async fn search(&self, _query: &Query) -> Result<SearchResults, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(status) = self.fail_with_status {
            return Err(SearchError::Provider {
                status,
                body: "mock provider failure".to_string(),
            });
        }
        Ok(SearchResults::new(self.response.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_search_returns_response() {
        let mock = MockSearch::new(json!({"organic": []}));
        let results = mock.search(&Query::new("topic")).await.unwrap();
        assert_eq!(results.organic_hits(), Some(0));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_search_failure_carries_status() {
        let mock = MockSearch::failing(500);
        let err = mock.search(&Query::new("topic")).await.unwrap_err();
        match err {
            SearchError::Provider { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected Provider error, got {other:?}"),
        }
    }
}
