//! Postwright Chunked Summarizer
//!
//! Splits extracted documents into bounded-size chunks and asks the LLM
//! for one standalone summary per chunk.
//!
//! # Architecture
//!
//! ```text
//! Documents → TextChunker → per-chunk prompts → LLM → ChunkSummaries
//! ```
//!
//! # Key Behaviors
//!
//! - **Line-oriented chunking**: splits prefer newline boundaries; only a
//!   line longer than the chunk budget is hard-cut
//! - **Bounded overlap**: neighboring chunks share a recorded overlap so
//!   no context is lost at the seam
//! - **Order preservation**: summaries come back in document order, chunk
//!   order within each document
//! - **Skip-and-continue**: one failed chunk is logged and skipped; the
//!   stage only fails when nothing at all could be summarized

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod prompt;
mod summarizer;

pub use chunking::TextChunker;
pub use config::SummarizerConfig;
pub use error::SummarizeError;
pub use summarizer::{ChunkedSummarizer, SUMMARY_TEMPERATURE};
