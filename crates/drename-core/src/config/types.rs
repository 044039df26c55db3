//! Configuration types and defaults

use serde::{Deserialize, Serialize};

/// Files larger than this are never content-rewritten
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Number of leading bytes probed for a null byte
pub const DEFAULT_BINARY_PROBE_LEN: usize = 1024;

/// Entries whose name starts with this are skipped with their subtree
pub const DEFAULT_HIDDEN_PREFIX: &str = ".";

/// Main configuration structure
///
/// Every field is optional so that layered files can override each other
/// key by key; the accessors fill in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Content size ceiling in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,

    /// Bytes inspected for binary detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_probe_len: Option<usize>,

    /// Separator joining several NEW parts when a match has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_separator: Option<String>,

    /// Hidden entry marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_prefix: Option<String>,
}

impl Config {
    /// Effective content size ceiling
    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Effective binary probe length
    #[must_use]
    pub fn binary_probe_len(&self) -> usize {
        self.binary_probe_len.unwrap_or(DEFAULT_BINARY_PROBE_LEN)
    }

    /// Effective default separator
    #[must_use]
    pub fn default_separator(&self) -> &str {
        self.default_separator.as_deref().unwrap_or_default()
    }

    /// Effective hidden marker
    #[must_use]
    pub fn hidden_prefix(&self) -> &str {
        self.hidden_prefix.as_deref().unwrap_or(DEFAULT_HIDDEN_PREFIX)
    }

    /// Overlay every key set in `other` onto `self`
    pub fn overlay(&mut self, other: Self) {
        if other.max_file_size.is_some() {
            self.max_file_size = other.max_file_size;
        }
        if other.binary_probe_len.is_some() {
            self.binary_probe_len = other.binary_probe_len;
        }
        if other.default_separator.is_some() {
            self.default_separator = other.default_separator;
        }
        if other.hidden_prefix.is_some() {
            self.hidden_prefix = other.hidden_prefix;
        }
    }
}
