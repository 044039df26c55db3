//! Configuration merging with precedence rules
//!
//! Files are applied lowest precedence first; each key set in a later file
//! replaces the earlier value. Unset keys fall through.

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::Result;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. `<root>/.drename.toml`
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        for path in [&files.global, &files.project, &files.cli]
            .into_iter()
            .flatten()
        {
            merged.overlay(Self::load(path)?);
        }

        Ok(merged)
    }

    fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
