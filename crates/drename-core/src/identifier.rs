//! Identifier parsing
//!
//! An identifier is written as `/`-separated parts (`test/my/user`). Each
//! part is matched ignoring case and rendered in the casing of whatever
//! text it replaces. `_` and `-` runs split parts as well, so `my_user`,
//! `my-user` and `my/user` name the same identifier.

use std::fmt;

use crate::error::Error;
use crate::replace::boundary;

/// Ordered, never-empty list of case-agnostic parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    parts: Vec<String>,
}

impl Identifier {
    /// Split `input` on `/` and separator runs, dropping empty segments
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIdentifier`] if no non-empty segment remains.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let parts: Vec<String> = input
            .split(|c: char| c == '/' || boundary::is_separator(c))
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        if parts.is_empty() {
            return Err(Error::EmptyIdentifier {
                input: input.to_string(),
            });
        }

        Ok(Self { parts })
    }

    /// The parts in order
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Number of parts (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Never true for a parsed identifier
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("/"))
    }
}

/// The immutable (OLD, NEW) pair for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSpec {
    old: Identifier,
    new: Identifier,
}

impl RenameSpec {
    /// Parse both identifiers and reject a no-op rename
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is empty or both resolve to
    /// the same parts.
    pub fn new(old: &str, new: &str) -> Result<Self, Error> {
        let old = Identifier::parse(old)?;
        let new = Identifier::parse(new)?;

        if old == new {
            return Err(Error::IdenticalIdentifiers);
        }

        Ok(Self { old, new })
    }

    /// Identifier being searched for
    #[must_use]
    pub const fn old(&self) -> &Identifier {
        &self.old
    }

    /// Identifier written in its place
    #[must_use]
    pub const fn new_identifier(&self) -> &Identifier {
        &self.new
    }

    /// Signed difference in part count, NEW minus OLD
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn part_difference(&self) -> isize {
        self.new.len() as isize - self.old.len() as isize
    }
}
