//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Startup configuration error (credentials, tunables)
    #[error("Configuration error: {0}")]
    Config(#[from] postwright_pipeline::ConfigError),

    /// Config file could not be read or parsed
    #[error("Invalid config file: {0}")]
    ConfigFile(String),

    /// A pipeline run failed
    #[error(transparent)]
    Pipeline(#[from] postwright_pipeline::PipelineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
