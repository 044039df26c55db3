//! Per-unit outcomes

use std::fmt;
use std::path::PathBuf;

use crate::planner::EntryKind;

/// Result of the content step for one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOutcome {
    /// Occurrences were replaced and written (or would be, in dry-run)
    Rewritten {
        /// Number of substitutions made
        replacements: usize,
    },
    /// No occurrence found
    NoMatch,
    /// Entry is not a regular file
    Structural,
    /// A null byte was found in the probed prefix
    Binary,
    /// File is above the size ceiling
    TooLarge {
        /// File size in bytes
        size: u64,
        /// Ceiling in bytes
        limit: u64,
    },
    /// Reading, decoding, or writing failed
    IoFailure {
        /// Underlying error
        detail: String,
    },
}

impl ContentOutcome {
    /// Whether the content step failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::TooLarge { .. } | Self::IoFailure { .. })
    }

    /// Error text for failed content steps
    #[must_use]
    pub fn error_detail(&self) -> Option<String> {
        match self {
            Self::TooLarge { size, limit } => Some(format!(
                "File size exceeds maximum limit ({size} > {limit} bytes)"
            )),
            Self::IoFailure { detail } => Some(detail.clone()),
            _ => None,
        }
    }
}

/// Result of the rename step for one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Name did not change
    NotNeeded,
    /// Renamed (or would be, in dry-run)
    Renamed,
    /// Something already exists at the destination
    Conflict,
    /// The rename call failed
    OsFailure {
        /// Underlying error
        detail: String,
    },
}

impl RenameOutcome {
    /// Whether the rename step failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Conflict | Self::OsFailure { .. })
    }
}

/// Single summary tag for a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeTag {
    /// Destination occupied; rename withheld
    PathConflict,
    /// Rename call failed
    OsFailure,
    /// Content could not be read or written
    ContentIoFailure,
    /// Content step skipped for size
    SizeLimitExceeded,
    /// Entry renamed
    Renamed,
    /// Content rewritten
    Rewritten,
    /// Content step skipped for binary content
    BinaryContentSkip,
    /// Content step skipped for a non-file
    StructuralSkip,
    /// Nothing to do
    NoMatchSkip,
}

impl OutcomeTag {
    /// Whether the tag marks a failure
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::PathConflict | Self::OsFailure | Self::ContentIoFailure | Self::SizeLimitExceeded
        )
    }
}

impl fmt::Display for OutcomeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PathConflict => "conflict",
            Self::OsFailure => "os failure",
            Self::ContentIoFailure => "io failure",
            Self::SizeLimitExceeded => "too large",
            Self::Renamed => "renamed",
            Self::Rewritten => "rewritten",
            Self::BinaryContentSkip => "binary",
            Self::StructuralSkip => "directory",
            Self::NoMatchSkip => "unchanged",
        };
        f.write_str(label)
    }
}

/// Outcome record for one processed unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    /// Path before the run, relative to the root
    pub old_path: PathBuf,
    /// Planned path, relative to the root
    pub new_path: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
    /// Content step result
    pub content: ContentOutcome,
    /// Rename step result
    pub rename: RenameOutcome,
}

impl UnitReport {
    /// Most significant tag for this unit
    ///
    /// Failures win over successes and rename results win over content
    /// results.
    #[must_use]
    pub const fn tag(&self) -> OutcomeTag {
        match (&self.rename, &self.content) {
            (RenameOutcome::Conflict, _) => OutcomeTag::PathConflict,
            (RenameOutcome::OsFailure { .. }, _) => OutcomeTag::OsFailure,
            (_, ContentOutcome::IoFailure { .. }) => OutcomeTag::ContentIoFailure,
            (_, ContentOutcome::TooLarge { .. }) => OutcomeTag::SizeLimitExceeded,
            (RenameOutcome::Renamed, _) => OutcomeTag::Renamed,
            (_, ContentOutcome::Rewritten { .. }) => OutcomeTag::Rewritten,
            (_, ContentOutcome::Binary) => OutcomeTag::BinaryContentSkip,
            (_, ContentOutcome::Structural) => OutcomeTag::StructuralSkip,
            (_, ContentOutcome::NoMatch) => OutcomeTag::NoMatchSkip,
        }
    }

    /// All error text for this unit, `; `-joined
    #[must_use]
    pub fn error_detail(&self) -> Option<String> {
        let mut errors = Vec::new();

        if let Some(detail) = self.content.error_detail() {
            errors.push(detail);
        }

        match &self.rename {
            RenameOutcome::Conflict => {
                errors.push(format!("{} (conflict)", self.new_path.display()));
            }
            RenameOutcome::OsFailure { detail } => {
                errors.push(format!("OS failed: {detail}"));
            }
            RenameOutcome::NotNeeded | RenameOutcome::Renamed => {}
        }

        (!errors.is_empty()).then(|| errors.join("; "))
    }

    /// Whether either step failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.content.is_failure() || self.rename.is_failure()
    }
}
