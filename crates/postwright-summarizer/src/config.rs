//! Configuration for the summarizer

use serde::{Deserialize, Serialize};

/// Configuration for chunking and summarization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Maximum chunk size (characters)
    pub max_chunk_chars: usize,

    /// Overlap carried from one chunk into the next (characters)
    ///
    /// Must be strictly less than `max_chunk_chars`.
    pub chunk_overlap_chars: usize,
}

impl SummarizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("max_chunk_chars must be greater than 0".to_string());
        }
        if self.chunk_overlap_chars >= self.max_chunk_chars {
            return Err(format!(
                "chunk_overlap_chars ({}) must be strictly less than max_chunk_chars ({})",
                self.chunk_overlap_chars, self.max_chunk_chars
            ));
        }
        Ok(())
    }
}

impl Default for SummarizerConfig {
    /// Defaults matching the reference behavior: 3000-char chunks with a
    /// 200-char overlap
    fn default() -> Self {
        Self {
            max_chunk_chars: 3000,
            chunk_overlap_chars: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chunk_chars, 3000);
        assert_eq!(config.chunk_overlap_chars, 200);
    }

    #[test]
    fn test_overlap_equal_to_max_rejected() {
        let config = SummarizerConfig {
            max_chunk_chars: 3000,
            chunk_overlap_chars: 3000,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlap_above_max_rejected() {
        let config = SummarizerConfig {
            max_chunk_chars: 100,
            chunk_overlap_chars: 150,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_rejected() {
        let config = SummarizerConfig {
            max_chunk_chars: 0,
            chunk_overlap_chars: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_overlap_allowed() {
        let config = SummarizerConfig {
            max_chunk_chars: 100,
            chunk_overlap_chars: 0,
        };
        assert!(config.validate().is_ok());
    }
}
