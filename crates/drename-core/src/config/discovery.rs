//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Name of the per-tree configuration file
pub const PROJECT_CONFIG_NAME: &str = ".drename.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Config at the root of the tree being renamed
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// `cli_path` is taken as given; existence is checked by the caller so
    /// a missing explicit file can be reported.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>, root: &Path) -> ConfigFiles {
        ConfigFiles {
            cli: cli_path.map(Path::to_path_buf),
            project: Self::find_project_config(root),
            global: Self::find_global_config(),
        }
    }

    fn find_project_config(root: &Path) -> Option<PathBuf> {
        let candidate = root.join(PROJECT_CONFIG_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("drename").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}
