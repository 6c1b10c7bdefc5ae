//! Postwright Pipeline Orchestrator
//!
//! Sequences the five stages that turn a topic query into a social post:
//!
//! ```text
//! Query → Search → SelectArticles → Extract → Summarize → Compose → Post
//! ```
//!
//! The orchestrator owns the query for the run's lifetime, threads it
//! unchanged into every stage, and is the single place failures surface.
//! Transitions are strictly forward; any unrecovered stage error moves
//! the run to `Failed` and halts it. Nothing is persisted: when a run
//! ends, only the returned post (or error) remains.
//!
//! Per-item failures stay inside their stages: one URL failing to
//! extract or one chunk failing to summarize never reaches this level.

#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;
mod stage;

pub use config::{Credentials, PipelineConfig};
pub use error::{ConfigError, PipelineError};
pub use orchestrator::Pipeline;
pub use stage::{NullObserver, ProgressObserver, Stage};
