//! Substitution audit record and run summary

use std::collections::BTreeSet;
use std::fmt::Write;

use super::RunReport;
use crate::replace::Substitution;

/// Deduplicated substitutions applied during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementRecord {
    entries: BTreeSet<Substitution>,
}

impl ReplacementRecord {
    /// Number of distinct substitutions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct substitutions, sorted
    #[must_use]
    pub fn into_vec(self) -> Vec<Substitution> {
        self.entries.into_iter().collect()
    }
}

impl Extend<Substitution> for ReplacementRecord {
    fn extend<T: IntoIterator<Item = Substitution>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

/// Run reporter
pub struct RenameReporter;

impl RenameReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &RunReport) -> String {
        let mut output = String::new();

        if report.dry_run {
            output.push_str("\n=== Rename Summary (dry run) ===\n");
        } else {
            output.push_str("\n=== Rename Summary ===\n");
        }
        let _ = writeln!(output, "Units:     {}", report.units.len());
        let _ = writeln!(output, "Rewritten: {}", report.rewritten());
        let _ = writeln!(output, "Renamed:   {}", report.renamed());
        let _ = writeln!(output, "Conflicts: {}", report.conflicts());

        let failures: Vec<_> = report
            .units
            .iter()
            .filter_map(|unit| {
                unit.error_detail()
                    .map(|detail| format!("{}: {detail}", unit.old_path.display()))
            })
            .collect();

        if !failures.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", failures.len());
            for failure in &failures {
                let _ = writeln!(output, "  - {failure}");
            }
        }

        if !report.warnings.is_empty() {
            let _ = writeln!(output, "\nWarnings ({}):", report.warnings.len());
            for warning in &report.warnings {
                let _ = writeln!(output, "  - {warning}");
            }
        }

        if report.is_success() {
            output.push_str("\nStatus: ✓ Success\n");
        } else {
            output.push_str("\nStatus: ✗ Completed with errors\n");
        }

        output
    }
}
