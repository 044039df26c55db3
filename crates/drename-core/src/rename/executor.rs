//! Per-unit content and rename executor

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use super::outcome::{ContentOutcome, RenameOutcome};
use super::reporting::ReplacementRecord;
use crate::config::Config;
use crate::planner::{EntryKind, PlannedUnit};
use crate::replace::CaseAwareReplacer;

/// Limits applied to the content step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLimits {
    /// Files above this size are not rewritten
    pub max_file_size: u64,
    /// Leading bytes checked for a null byte
    pub binary_probe_len: usize,
}

impl From<&Config> for ContentLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_file_size: config.max_file_size(),
            binary_probe_len: config.binary_probe_len(),
        }
    }
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Paths taken and freed by simulated renames
#[derive(Debug, Default)]
struct DryRunOverlay {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

/// Applies content rewrites and renames, one unit at a time
pub struct UnitExecutor {
    dry_run: bool,
    limits: ContentLimits,
    overlay: DryRunOverlay,
}

impl UnitExecutor {
    /// Create a new executor
    #[must_use]
    pub fn new(dry_run: bool, limits: ContentLimits) -> Self {
        Self {
            dry_run,
            limits,
            overlay: DryRunOverlay::default(),
        }
    }

    /// Run both steps for `unit`
    ///
    /// Never fails: every problem is returned as an outcome. Substitutions
    /// that were applied (or would be, in dry-run) are added to `record`.
    pub fn execute(
        &mut self,
        unit: &PlannedUnit,
        replacer: &CaseAwareReplacer,
        record: &mut ReplacementRecord,
    ) -> (ContentOutcome, RenameOutcome) {
        let content = self.rewrite_content(unit, replacer, record);
        let rename = self.rename(unit, record);
        tracing::debug!(
            "{} -> {:?} / {:?}",
            unit.path.display(),
            content,
            rename
        );
        (content, rename)
    }

    fn rewrite_content(
        &self,
        unit: &PlannedUnit,
        replacer: &CaseAwareReplacer,
        record: &mut ReplacementRecord,
    ) -> ContentOutcome {
        if unit.kind != EntryKind::File {
            return ContentOutcome::Structural;
        }

        let path = &unit.path;

        match is_binary(path, self.limits.binary_probe_len) {
            Ok(true) => return ContentOutcome::Binary,
            Ok(false) => {}
            Err(e) => {
                return ContentOutcome::IoFailure {
                    detail: format!("Failed to read {}: {e}", path.display()),
                };
            }
        }

        let size = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                return ContentOutcome::IoFailure {
                    detail: format!("Failed to stat {}: {e}", path.display()),
                };
            }
        };
        if size > self.limits.max_file_size {
            return ContentOutcome::TooLarge {
                size,
                limit: self.limits.max_file_size,
            };
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return ContentOutcome::IoFailure {
                    detail: format!("Failed to read {}: {e}", path.display()),
                };
            }
        };

        let replacement = replacer.replace(&content);
        if !replacement.is_changed() {
            return ContentOutcome::NoMatch;
        }

        if self.dry_run {
            tracing::info!("[DRY RUN] Would rewrite: {}", path.display());
        } else if let Err(e) = fs::write(path, &replacement.text) {
            return ContentOutcome::IoFailure {
                detail: format!("Failed to write {}: {e}", path.display()),
            };
        }

        let replacements = replacement.substitutions.len();
        record.extend(replacement.substitutions);
        ContentOutcome::Rewritten { replacements }
    }

    fn rename(&mut self, unit: &PlannedUnit, record: &mut ReplacementRecord) -> RenameOutcome {
        if !unit.needs_rename() {
            return RenameOutcome::NotNeeded;
        }

        if self.is_occupied(&unit.destination) {
            tracing::warn!(
                "Conflict: {} already exists, not renaming {}",
                unit.destination.display(),
                unit.path.display()
            );
            return RenameOutcome::Conflict;
        }

        if self.dry_run {
            tracing::info!(
                "[DRY RUN] Would rename: {} -> {}",
                unit.path.display(),
                unit.destination.display()
            );
            self.overlay.vacated.insert(unit.path.clone());
            self.overlay.vacated.remove(&unit.destination);
            self.overlay.claimed.remove(&unit.path);
            self.overlay.claimed.insert(unit.destination.clone());
        } else if let Err(e) = fs::rename(&unit.path, &unit.destination) {
            return RenameOutcome::OsFailure {
                detail: e.to_string(),
            };
        }

        record.extend(unit.name_substitutions.iter().cloned());
        RenameOutcome::Renamed
    }

    /// Whether anything sits at `path`, counting simulated renames
    fn is_occupied(&self, path: &Path) -> bool {
        if self.overlay.claimed.contains(path) {
            return true;
        }
        !self.overlay.vacated.contains(path) && fs::symlink_metadata(path).is_ok()
    }
}

/// Whether the first `probe_len` bytes of `path` contain a null byte
fn is_binary(path: &Path, probe_len: usize) -> std::io::Result<bool> {
    let mut buffer = Vec::with_capacity(probe_len);
    File::open(path)?
        .take(probe_len as u64)
        .read_to_end(&mut buffer)?;
    Ok(buffer.contains(&0))
}
