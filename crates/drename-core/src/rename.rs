//! Rename engine
//!
//! Executes a [`crate::planner::RenamePlan`] one unit at a time: first the
//! content step (files only), then the rename step. Every unit yields exactly
//! one [`UnitReport`]; no unit's failure stops the run.

mod executor;
mod orchestrator;
mod outcome;
mod reporting;

use std::path::PathBuf;

pub use executor::{ContentLimits, UnitExecutor};
pub use orchestrator::{RenameEngine, UnitObserver};
pub use outcome::{ContentOutcome, OutcomeTag, RenameOutcome, UnitReport};
pub use reporting::{RenameReporter, ReplacementRecord};

use crate::replace::Substitution;

/// Everything a run produced, for the display layer
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Canonical root of the run
    pub root: PathBuf,
    /// Whether the filesystem was left untouched
    pub dry_run: bool,
    /// One report per unit, in execution order
    pub units: Vec<UnitReport>,
    /// Distinct substitutions applied, sorted
    pub substitutions: Vec<Substitution>,
    /// Non-fatal walk problems
    pub warnings: Vec<String>,
}

impl RunReport {
    /// Files whose content was rewritten
    #[must_use]
    pub fn rewritten(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u.content, ContentOutcome::Rewritten { .. }))
            .count()
    }

    /// Entries that were renamed
    #[must_use]
    pub fn renamed(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.rename == RenameOutcome::Renamed)
            .count()
    }

    /// Renames withheld because the destination existed
    #[must_use]
    pub fn conflicts(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.rename == RenameOutcome::Conflict)
            .count()
    }

    /// Units with a failed step
    #[must_use]
    pub fn failures(&self) -> usize {
        self.units.iter().filter(|u| u.is_failure()).count()
    }

    /// Whether no unit failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}
