//! Postwright Domain Layer
//!
//! This crate contains the core data model for Postwright. It defines the
//! value objects that flow through the pipeline and the trait interfaces
//! that all provider layers implement.
//!
//! ## Key Concepts
//!
//! - **Query**: The topic string for one run, threaded unchanged through
//!   every stage
//! - **SearchResults**: The search provider's response, kept opaque
//! - **Document**: Extracted page text for one URL, possibly marked failed
//! - **Chunk / ChunkSummary**: Bounded slices of document text and their
//!   per-chunk summaries
//! - **Post**: The final generated text, the terminal artifact of a run
//!
//! ## Architecture
//!
//! Data flows strictly forward: query → search → selection → extraction →
//! summarization → composition. Nothing here performs I/O; the HTTP and
//! LLM implementations live in the provider crates and plug in through
//! the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod completion;
pub mod document;
pub mod post;
pub mod query;
pub mod run;
pub mod search;
pub mod traits;

// Re-exports for convenience
pub use chunk::{Chunk, ChunkSummary};
pub use completion::CompletionRequest;
pub use document::Document;
pub use post::Post;
pub use query::Query;
pub use run::RunId;
pub use search::SearchResults;
