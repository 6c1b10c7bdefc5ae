//! Serper (Google Search) client
//!
//! One HTTP POST per query: JSON body `{"q": <query>}`, API key in the
//! `X-API-KEY` header. The 2xx response body is returned as opaque JSON;
//! the provider's schema is not something this client interprets.

use crate::SearchError;
use async_trait::async_trait;
use postwright_domain::traits::SearchProvider;
use postwright_domain::{Query, SearchResults};
use std::time::Duration;
use tracing::{info, warn};

/// Default Serper API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/search";

/// Default timeout for search requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts for rate-limited requests
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Serper search API client
pub struct SerperClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl SerperClient {
    /// Create a new client for the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the API endpoint (for tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn search_inner(&self, query: &Query) -> Result<SearchResults, SearchError> {
        let body = serde_json::json!({ "q": query.as_str() });

        info!(query = %query, "Serper search");

        // Bounded retry on rate limits and transport failures
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&self.endpoint)
                .header("X-API-KEY", &self.api_key)
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let raw: serde_json::Value = response.json().await.map_err(|e| {
                            SearchError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))
                        })?;
                        let results = SearchResults::new(raw);
                        info!(
                            query = %query,
                            organic = results.organic_hits().unwrap_or(0),
                            "Serper search complete"
                        );
                        return Ok(results);
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        warn!(attempt = attempts + 1, "Serper rate limited, backing off");
                        last_error = Some(SearchError::RateLimited);
                    } else {
                        let body_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        return Err(SearchError::Provider {
                            status: status.as_u16(),
                            body: body_text,
                        });
                    }
                }
                Err(e) => {
                    last_error = Some(SearchError::Request(e.to_string()));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| SearchError::Request("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    type Error = SearchError;

    async fn search(&self, query: &Query) -> Result<SearchResults, Self::Error> {
        self.search_inner(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SerperClient::new("key");
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_client_builders() {
        let client = SerperClient::new("key")
            .with_endpoint("http://localhost:8080/search")
            .with_max_retries(1);
        assert_eq!(client.endpoint, "http://localhost:8080/search");
        assert_eq!(client.max_retries, 1);
    }

    #[tokio::test]
    async fn test_error_on_unreachable_endpoint() {
        let client = SerperClient::new("key")
            .with_endpoint("http://127.0.0.1:9/search")
            .with_max_retries(1);

        let result = client.search(&Query::new("test")).await;
        assert!(matches!(result, Err(SearchError::Request(_))));
    }
}
