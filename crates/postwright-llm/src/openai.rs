//! OpenAI-compatible chat completions provider
//!
//! One HTTP request per prompt call. The request carries the model
//! identifier and per-call temperature; the response's first choice is
//! the completion text.
//!
//! # Features
//!
//! - Async HTTP communication with the chat completions API
//! - Configurable endpoint and model
//! - Bounded retry with exponential backoff on rate limits
//! - Timeout handling

use crate::LlmError;
use async_trait::async_trait;
use postwright_domain::traits::LlmProvider;
use postwright_domain::CompletionRequest;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts for rate-limited requests
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat completions provider for OpenAI-compatible APIs
pub struct OpenAiChat {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

impl OpenAiChat {
    /// Create a new provider for the default endpoint
    ///
    /// # Parameters
    ///
    /// - `api_key`: Bearer token for the API
    /// - `model`: Model identifier (e.g. `gpt-4o-mini`)
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the API endpoint (for proxies and tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete_inner(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let body = ChatRequest {
            model: &self.model,
            temperature: request.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        debug!(
            model = %self.model,
            temperature = request.temperature,
            prompt_chars = request.prompt.len(),
            "LLM completion request"
        );

        // Bounded retry on rate limits and transport failures
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(self.api_key.trim())
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let parsed: ChatResponse = response.json().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return parsed
                            .choices
                            .into_iter()
                            .next()
                            .map(|choice| choice.message.content)
                            .ok_or_else(|| {
                                LlmError::InvalidResponse("Response has no choices".to_string())
                            });
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        warn!(attempt = attempts + 1, "LLM rate limited, backing off");
                        last_error = Some(LlmError::RateLimited);
                    } else {
                        let body_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        return Err(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, body_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
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
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl LlmProvider for OpenAiChat {
    type Error = LlmError;

    async fn complete(&self, request: CompletionRequest) -> Result<String, Self::Error> {
        self.complete_inner(&request).await
    }
}
