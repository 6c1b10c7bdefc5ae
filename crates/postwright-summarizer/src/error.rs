//! Error types for the summarizer

use thiserror::Error;

/// Errors that can occur during summarization
///
/// Individual chunk failures are absorbed (skip-and-warn); these
/// variants are the cases where the stage as a whole cannot produce
/// anything.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Every document was empty or failed, so no chunk was produced
    #[error("No document text to summarize")]
    NoContent,

    /// Every chunk summarization call failed
    #[error("All {attempted} chunk summarizations failed")]
    AllChunksFailed {
        /// How many chunks were attempted
        attempted: usize,
    },
}
