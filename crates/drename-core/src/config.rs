//! Configuration file parsing and merging
//!
//! This module handles:
//! - Config file discovery (CLI flag, tree root, global config dir)
//! - TOML parsing with serde
//! - Key-by-key merging with precedence rules
//! - Validation and error reporting

mod discovery;
mod merge;
mod types;
mod validation;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles, PROJECT_CONFIG_NAME};
pub use merge::ConfigMerger;
pub use types::{
    Config, DEFAULT_BINARY_PROBE_LEN, DEFAULT_HIDDEN_PREFIX, DEFAULT_MAX_FILE_SIZE,
};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration for a run rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing, or if any
    /// config file is unreadable or invalid.
    pub fn load(cli_config_path: Option<&Path>, root: &Path) -> Result<Config> {
        if let Some(path) = cli_config_path
            && !path.is_file()
        {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let files = ConfigDiscovery::discover(cli_config_path, root);
        let merged = ConfigMerger::merge(&files)?;
        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }
}
