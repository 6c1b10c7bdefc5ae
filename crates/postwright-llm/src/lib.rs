//! Postwright LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `postwright-domain`.
//!
//! # Providers
//!
//! - `MockLlm`: Deterministic mock for testing
//! - `OpenAiChat`: OpenAI-compatible chat completions over HTTP
//!
//! # Examples
//!
//! ```
//! use postwright_llm::MockLlm;
//! use postwright_domain::traits::LlmProvider;
//! use postwright_domain::CompletionRequest;
//!
//! # async fn example() {
//! let provider = MockLlm::new("Hello from the model");
//! let request = CompletionRequest::new("any prompt", 0.4);
//! let result = provider.complete(request).await.unwrap();
//! assert_eq!(result, "Hello from the model");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use postwright_domain::traits::LlmProvider;
use postwright_domain::CompletionRequest;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiChat;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the LLM API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit still exceeded after bounded retries
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Rules match on a substring of the prompt, first match wins, so one
/// mock can serve the distinct prompts of a whole pipeline run.
///
/// # Examples
///
/// ```
/// use postwright_llm::MockLlm;
/// use postwright_domain::traits::LlmProvider;
/// use postwright_domain::CompletionRequest;
///
/// # async fn example() {
/// let mut provider = MockLlm::new("fallback");
/// provider.respond_when("choose the best", r#"["https://example.com/a"]"#);
/// provider.fail_when("broken");
///
/// let reply = provider
///     .complete(CompletionRequest::new("please choose the best 3 articles", 0.4))
///     .await
///     .unwrap();
/// assert!(reply.starts_with('['));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockLlm {
    default_response: String,
    rules: Arc<Mutex<Vec<(String, MockReply)>>>,
    call_count: Arc<Mutex<usize>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail,
}

impl MockLlm {
    /// Create a mock with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            rules: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Respond with `response` to prompts containing `needle`
    pub fn respond_when(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.rules
            .lock()
            .unwrap()
            .push((needle.into(), MockReply::Text(response.into())));
    }

    /// Fail prompts containing `needle`
    pub fn fail_when(&mut self, needle: impl Into<String>) {
        self.rules
            .lock()
            .unwrap()
            .push((needle.into(), MockReply::Fail));
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProvider for MockLlm {
    type Error = LlmError;

    async fn complete(&self, request: CompletionRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let rules = self.rules.lock().unwrap();
        for (needle, reply) in rules.iter() {
            if request.prompt.contains(needle) {
                return match reply {
                    MockReply::Text(text) => Ok(text.clone()),
                    MockReply::Fail => Err(LlmError::Other("Mock error".to_string())),
                };
            }
        }

        Ok(self.default_response.clone())
    }
}
