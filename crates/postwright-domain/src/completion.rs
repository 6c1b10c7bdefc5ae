//! LLM completion requests

/// One prompt call against an LLM provider
///
/// The model identifier is provider state; a request only carries what
/// varies per call. Selection and summarization run at temperature 0.4,
/// final composition at 0.7; those constants live with the components
/// that own the prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The rendered prompt text
    pub prompt: String,

    /// Sampling temperature for this call
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a completion request
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
        }
    }
}
