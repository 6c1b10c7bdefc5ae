//! Pipeline configuration and credentials

use crate::error::ConfigError;
use postwright_summarizer::SummarizerConfig;
use serde::{Deserialize, Serialize};

/// Environment variable holding the search provider API key
pub const SEARCH_KEY_VAR: &str = "SERP_API_KEY";

/// Environment variable holding the LLM provider API key
pub const LLM_KEY_VAR: &str = "OPENAI_API_KEY";

/// The two opaque credentials the pipeline's providers need
///
/// Read once at startup; a missing credential is a fatal configuration
/// error, never a run error. Credentials are constructed explicitly and
/// passed down; there is no ambient process-wide credential state.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API key for the search provider
    pub search_api_key: String,

    /// API key for the LLM provider
    pub llm_api_key: String,
}

impl Credentials {
    /// Build credentials, rejecting empty values
    pub fn new(
        search_api_key: impl Into<String>,
        llm_api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let search_api_key = search_api_key.into();
        let llm_api_key = llm_api_key.into();

        if search_api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential(SEARCH_KEY_VAR));
        }
        if llm_api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential(LLM_KEY_VAR));
        }

        Ok(Self {
            search_api_key,
            llm_api_key,
        })
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let search = std::env::var(SEARCH_KEY_VAR)
            .map_err(|_| ConfigError::MissingCredential(SEARCH_KEY_VAR))?;
        let llm = std::env::var(LLM_KEY_VAR)
            .map_err(|_| ConfigError::MissingCredential(LLM_KEY_VAR))?;
        Self::new(search, llm)
    }
}

/// Tunables for one pipeline instance
///
/// Credentials deliberately stay out of this struct so a config file can
/// be shared or committed without leaking secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Chunking and summarization settings
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// How many pages are fetched concurrently during extraction
    #[serde(default = "default_extract_concurrency")]
    pub extract_concurrency: usize,
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.summarizer.validate()?;
        if self.extract_concurrency == 0 {
            return Err("extract_concurrency must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summarizer: SummarizerConfig::default(),
            extract_concurrency: default_extract_concurrency(),
        }
    }
}

fn default_extract_concurrency() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_overlap_rejected() {
        let mut config = PipelineConfig::default();
        config.summarizer.chunk_overlap_chars = config.summarizer.max_chunk_chars;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = PipelineConfig::default();
        config.extract_concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(
            config.summarizer.max_chunk_chars,
            parsed.summarizer.max_chunk_chars
        );
        assert_eq!(config.extract_concurrency, parsed.extract_concurrency);
    }

    #[test]
    fn test_toml_defaults_fill_missing_fields() {
        let parsed = PipelineConfig::from_toml("").unwrap();
        assert_eq!(parsed.extract_concurrency, 3);
        assert_eq!(parsed.summarizer.max_chunk_chars, 3000);
    }

    #[test]
    fn test_credentials_reject_empty_values() {
        assert!(Credentials::new("", "llm-key").is_err());
        assert!(Credentials::new("search-key", "  ").is_err());
        assert!(Credentials::new("search-key", "llm-key").is_ok());
    }
}
