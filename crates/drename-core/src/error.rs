//! Errors raised while setting up a run
//!
//! Per-unit failures during a run are never errors: they are reported as
//! outcomes (see [`crate::rename::ContentOutcome`] and
//! [`crate::rename::RenameOutcome`]).

use thiserror::Error as ThisError;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Typed errors for invalid run setup
#[derive(Debug, ThisError)]
pub enum Error {
    /// An identifier had no non-empty `/`-separated part
    #[error("identifier '{input}' has no parts")]
    EmptyIdentifier {
        /// The raw input string
        input: String,
    },

    /// OLD and NEW resolve to the same parts
    #[error("Old and new are the same. No actions will be taken.")]
    IdenticalIdentifiers,

    /// The compiled matcher could not be built
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration value is out of range
    #[error("invalid config value for '{key}': {reason}")]
    InvalidConfig {
        /// Offending key
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}
