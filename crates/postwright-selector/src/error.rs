//! Error types for article selection

use thiserror::Error;

/// Errors that can occur while selecting articles
#[derive(Error, Debug)]
pub enum SelectionError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The model's output could not be parsed into any usable URL
    #[error("Malformed selection: {0}")]
    Malformed(String),
}
