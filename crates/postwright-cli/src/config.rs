//! Config file loading.

use crate::error::{CliError, Result};
use postwright_pipeline::PipelineConfig;
use std::path::Path;

/// Load pipeline tunables from a TOML file.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let contents = std::fs::read_to_string(path)?;
    PipelineConfig::from_toml(&contents).map_err(CliError::ConfigFile)
}
