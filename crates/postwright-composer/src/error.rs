//! Error types for post composition

use thiserror::Error;

/// Errors that can occur while composing the final post
#[derive(Error, Debug)]
pub enum ComposeError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),
}
