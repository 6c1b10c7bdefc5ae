//! Error types for page fetching

use thiserror::Error;

/// Errors that can occur while fetching one page
///
/// These never surface as stage failures; the extractor absorbs them
/// into the affected document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout fetching {0}")]
    Timeout(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success HTTP status
    #[error("HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// URL that answered with the status
        url: String,
    },

    /// Page yielded no extractable text
    #[error("No content extracted from {0}")]
    NoContent(String),

    /// URL refused before fetching (non-http(s), localhost, private range)
    #[error("Unsafe URL refused: {0}")]
    UnsafeUrl(String),
}
