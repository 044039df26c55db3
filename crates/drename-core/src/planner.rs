//! Path planner
//!
//! Walks the tree once, skipping hidden entries and everything beneath
//! them, computes each entry's destination from its own final name, and
//! orders the resulting units for execution.

mod ordering;

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

pub use ordering::sort_for_execution;

use crate::replace::{CaseAwareReplacer, Substitution};

/// Kind of filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symbolic link; renamed, never followed or rewritten
    Symlink,
    /// FIFO, socket or device node; renamed, never opened
    Other,
}

impl EntryKind {
    fn of(entry: &DirEntry) -> Self {
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// One discovered entry and where it should end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUnit {
    /// Current (pre-run) path
    pub path: PathBuf,
    /// Parent path plus the rendered final name
    pub destination: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
    /// Number of path segments below the root
    pub depth: usize,
    /// Substitutions that produced the destination name
    pub name_substitutions: Vec<Substitution>,
}

impl PlannedUnit {
    /// Final path segment, lossily decoded
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the destination differs from the current path
    #[must_use]
    pub fn needs_rename(&self) -> bool {
        self.path != self.destination
    }
}

/// Ordered units for one run
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    /// Units in execution order
    pub units: Vec<PlannedUnit>,
    /// Non-fatal problems met while walking
    pub warnings: Vec<String>,
}

/// Builds a [`RenamePlan`] for a tree
pub struct PathPlanner<'a> {
    replacer: &'a CaseAwareReplacer,
    hidden_prefix: &'a str,
}

impl<'a> PathPlanner<'a> {
    /// Create a planner using `replacer` for names
    #[must_use]
    pub const fn new(replacer: &'a CaseAwareReplacer, hidden_prefix: &'a str) -> Self {
        Self {
            replacer,
            hidden_prefix,
        }
    }

    /// Walk `root` and order every visible entry for execution
    ///
    /// The root itself is never a unit.
    #[must_use]
    pub fn plan(&self, root: &Path) -> RenamePlan {
        let mut plan = RenamePlan::default();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_hidden(entry));

        for entry in walker {
            match entry {
                Ok(entry) => plan.units.push(self.plan_entry(&entry)),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {e}");
                    plan.warnings.push(format!("Failed to walk entry: {e}"));
                }
            }
        }

        sort_for_execution(&mut plan.units, self.replacer.spec().part_difference());
        tracing::debug!("Planned {} units under {}", plan.units.len(), root.display());

        plan
    }

    fn is_hidden(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry
                .file_name()
                .to_string_lossy()
                .starts_with(self.hidden_prefix)
    }

    fn plan_entry(&self, entry: &DirEntry) -> PlannedUnit {
        let path = entry.path().to_path_buf();

        let (destination, name_substitutions) = match entry.file_name().to_str() {
            Some(name) => {
                let replacement = self.replacer.replace(name);
                let destination = path.with_file_name(&replacement.text);
                (destination, replacement.substitutions)
            }
            None => (path.clone(), Vec::new()),
        };

        PlannedUnit {
            path,
            destination,
            kind: EntryKind::of(entry),
            depth: entry.depth(),
            name_substitutions,
        }
    }
}
