//! Run orchestration - plans the tree, then executes units in order

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::RunReport;
use super::executor::{ContentLimits, UnitExecutor};
use super::outcome::UnitReport;
use super::reporting::ReplacementRecord;
use crate::config::Config;
use crate::error::Result;
use crate::identifier::RenameSpec;
use crate::planner::PathPlanner;
use crate::replace::CaseAwareReplacer;

/// Callback invoked with each unit's report as soon as it is processed
pub type UnitObserver<'a> = Box<dyn FnMut(&UnitReport) + 'a>;

/// Main rename engine
///
/// Holds everything that stays fixed for a run: the compiled replacer and
/// the effective configuration.
pub struct RenameEngine {
    replacer: CaseAwareReplacer,
    config: Config,
    dry_run: bool,
}

impl RenameEngine {
    /// Create a new rename engine
    ///
    /// # Errors
    ///
    /// Returns an error if the matcher for OLD cannot be compiled.
    pub fn new(spec: RenameSpec, config: Config) -> Result<Self> {
        let replacer = CaseAwareReplacer::new(spec)
            .context("Failed to build matcher")?
            .with_default_separator(config.default_separator());

        Ok(Self {
            replacer,
            config,
            dry_run: false,
        })
    }

    /// Preview changes without touching the filesystem
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The compiled replacer
    #[must_use]
    pub const fn replacer(&self) -> &CaseAwareReplacer {
        &self.replacer
    }

    /// Process every visible entry under `root`
    ///
    /// Per-unit problems are reported in the result, never returned as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be resolved or is not a directory.
    pub fn run(&self, root: &Path) -> Result<RunReport> {
        self.run_with_observer(root, None)
    }

    /// Process every visible entry under `root`, reporting units as they finish
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be resolved or is not a directory.
    pub fn run_with_observer(
        &self,
        root: &Path,
        mut observer: Option<UnitObserver<'_>>,
    ) -> Result<RunReport> {
        let root = dunce::canonicalize(root)
            .with_context(|| format!("Failed to resolve root: {}", root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("Root is not a directory: {}", root.display());
        }

        let spec = self.replacer.spec();
        tracing::debug!(
            "Renaming '{}' -> '{}' under {} (dry run: {})",
            spec.old(),
            spec.new_identifier(),
            root.display(),
            self.dry_run
        );

        let plan = PathPlanner::new(&self.replacer, self.config.hidden_prefix()).plan(&root);

        let mut executor = UnitExecutor::new(self.dry_run, ContentLimits::from(&self.config));
        let mut record = ReplacementRecord::default();
        let mut units = Vec::with_capacity(plan.units.len());

        for unit in &plan.units {
            let (content, rename) = executor.execute(unit, &self.replacer, &mut record);
            let report = UnitReport {
                old_path: relative_to(&root, &unit.path),
                new_path: relative_to(&root, &unit.destination),
                kind: unit.kind,
                content,
                rename,
            };

            if let Some(ref mut observe) = observer {
                observe(&report);
            }
            units.push(report);
        }

        Ok(RunReport {
            root,
            dry_run: self.dry_run,
            units,
            substitutions: record.into_vec(),
            warnings: plan.warnings,
        })
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
