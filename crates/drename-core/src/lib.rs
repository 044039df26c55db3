//! # drename-core
//!
//! Core library for case-aware renaming across a directory tree.
//!
//! This library finds a multi-part identifier (`my/user`) in file names,
//! directory names and text file contents, whatever its spelling
//! (`my_user`, `my-user`, `myUser`, `MY_USER`), and replaces it with another
//! identifier rendered in the same case style and separator convention.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for the drename library
pub mod error;

/// `/`-delimited identifier parsing
pub mod identifier;

/// Case-aware matching and rendering
pub mod replace;

/// Tree walking and rename ordering
pub mod planner;

/// Content rewriting, rename execution and reporting
pub mod rename;

/// Configuration file parsing and management
pub mod config;

pub use config::Config;
pub use error::{Error, Result};
pub use identifier::{Identifier, RenameSpec};
pub use rename::{RenameEngine, RunReport};
pub use replace::CaseAwareReplacer;
