//! Postwright CLI - command-line interface for the post generation pipeline.

pub mod cli;
pub mod config;
pub mod error;
pub mod observer;

pub use cli::{Cli, DEFAULT_QUERY};
pub use config::load_config;
pub use error::{CliError, Result};
pub use observer::ConsoleObserver;
