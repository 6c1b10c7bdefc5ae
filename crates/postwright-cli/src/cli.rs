//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Sample topic used when no query is given.
pub const DEFAULT_QUERY: &str = "Tesla full self-driving 2023";

/// Turn a topic query into a social media post.
#[derive(Debug, Parser)]
#[command(name = "postwright", version, about = "Generates a social media post about a topic by searching the web, reading the best articles and summarizing them")]
pub struct Cli {
    /// Topic to write about; a sample topic is used when omitted
    pub query: Option<String>,

    /// Model identifier for the LLM provider
    #[arg(long, env = "POSTWRIGHT_MODEL", default_value = postwright_llm::openai::DEFAULT_MODEL)]
    pub model: String,

    /// TOML file with pipeline tunables (chunk sizes, concurrency)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_positional() {
        let cli = Cli::parse_from(["postwright", "rust release highlights"]);
        assert_eq!(cli.query.as_deref(), Some("rust release highlights"));
    }

    #[test]
    fn test_query_defaults_to_none() {
        let cli = Cli::parse_from(["postwright"]);
        assert!(cli.query.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_model_flag() {
        let cli = Cli::parse_from(["postwright", "--model", "gpt-4o", "topic"]);
        assert_eq!(cli.model, "gpt-4o");
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["postwright", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
