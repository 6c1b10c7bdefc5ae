//! Error types for the pipeline

use thiserror::Error;

/// Configuration errors, surfaced before any run starts
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required credential is absent or empty
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// A tunable has an invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A config file could not be read or parsed
    #[error("Failed to load config file: {0}")]
    File(String),
}

/// Run-level errors, tagged with the stage that failed
///
/// Stage errors are not retried here; whatever bounded retrying is
/// appropriate (rate limits) already happened inside the providers.
/// The message reaches the UI as-is, with no partial result.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration problem detected at construction time
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The search stage failed
    #[error("Search failed: {0}")]
    Search(String),

    /// The article selection stage failed
    #[error("Article selection failed: {0}")]
    Selection(String),

    /// The summarization stage failed
    #[error("Summarization failed: {0}")]
    Summarize(String),

    /// The final composition stage failed
    #[error("Post composition failed: {0}")]
    Compose(String),
}
