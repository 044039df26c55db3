//! Case-aware substitution engine
//!
//! This module ties together:
//! - `boundary`: splitting text at `_`/`-` runs and camelCase transitions
//! - `pattern`: the compiled, case-insensitive matcher for the OLD identifier
//! - `render`: rendering the NEW identifier in the style of each match

pub mod boundary;
mod pattern;
mod render;

pub use pattern::{BoundaryPattern, Matches};
pub use render::{CaseStyle, render};

use crate::error::Error;
use crate::identifier::RenameSpec;

/// One literal substitution that was rendered
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Substitution {
    /// Text as it appeared
    pub old: String,
    /// Text written in its place
    pub new: String,
}

/// Result of running the replacer over one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The rewritten text
    pub text: String,
    /// Substitutions that changed something, in order of appearance
    pub substitutions: Vec<Substitution>,
}

impl Replacement {
    /// Whether any substitution changed the text
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.substitutions.is_empty()
    }
}

/// Finds OLD and writes NEW in the casing of each occurrence
///
/// Built once per run from an immutable [`RenameSpec`].
#[derive(Debug, Clone)]
pub struct CaseAwareReplacer {
    spec: RenameSpec,
    pattern: BoundaryPattern,
    default_separator: String,
}

impl CaseAwareReplacer {
    /// Compile the matcher for `spec`
    ///
    /// # Errors
    ///
    /// Returns an error if the matcher cannot be compiled.
    pub fn new(spec: RenameSpec) -> Result<Self, Error> {
        let pattern = BoundaryPattern::new(spec.old())?;
        Ok(Self {
            spec,
            pattern,
            default_separator: String::new(),
        })
    }

    /// Separator used when a match has none to reuse
    #[must_use]
    pub fn with_default_separator(mut self, separator: impl Into<String>) -> Self {
        self.default_separator = separator.into();
        self
    }

    /// The (OLD, NEW) pair this replacer was built from
    #[must_use]
    pub const fn spec(&self) -> &RenameSpec {
        &self.spec
    }

    /// Render the NEW identifier for one matched string
    #[must_use]
    pub fn render_match(&self, matched: &str) -> String {
        render(
            matched,
            self.spec.new_identifier().parts(),
            &self.default_separator,
        )
    }

    /// Replace every occurrence of OLD in `input`
    #[must_use]
    pub fn replace(&self, input: &str) -> Replacement {
        let mut text = String::with_capacity(input.len());
        let mut substitutions = Vec::new();
        let mut last = 0;

        for found in self.pattern.find_iter(input) {
            let rendered = self.render_match(found.as_str());

            text.push_str(&input[last..found.start()]);
            text.push_str(&rendered);
            last = found.end();

            if rendered != found.as_str() {
                substitutions.push(Substitution {
                    old: found.as_str().to_string(),
                    new: rendered,
                });
            }
        }
        text.push_str(&input[last..]);

        Replacement {
            text,
            substitutions,
        }
    }
}
