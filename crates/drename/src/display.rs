//! Terminal rendering of unit outcomes

use std::path::Path;

use drename_core::RunReport;
use drename_core::planner::EntryKind;
use drename_core::rename::{ContentOutcome, RenameReporter, UnitReport};
use drename_core::replace::Substitution;
use similar::{ChangeTag, TextDiff};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const KIND_WIDTH: usize = 14;

/// Console output for a run
pub struct Display {
    color: bool,
}

impl Display {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn print_header(&self) {
        println!("{}", self.header());
    }

    pub fn print_unit(&self, unit: &UnitReport) {
        println!("{}", self.unit_row(unit));
    }

    pub fn print_substitutions(&self, substitutions: &[Substitution]) {
        if substitutions.is_empty() {
            return;
        }
        println!("\nReplacements:");
        for sub in substitutions {
            println!("  {}", self.path_diff(&sub.old, &sub.new));
        }
    }

    pub fn print_summary(&self, report: &RunReport) {
        print!("{}", RenameReporter::generate_summary(report));
    }

    fn header(&self) -> String {
        let text = format!("{:<KIND_WIDTH$} {:<40} Errors", "Kind", "Path");
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text
        }
    }

    fn unit_row(&self, unit: &UnitReport) -> String {
        let path = self.path_diff(&display_path(&unit.old_path), &display_path(&unit.new_path));
        let errors = unit.error_detail().unwrap_or_default();
        let row = format!("{:<KIND_WIDTH$} {path}", kind_label(unit));
        if errors.is_empty() {
            row
        } else if self.color {
            format!("{row}  {RED}{errors}{RESET}")
        } else {
            format!("{row}  {errors}")
        }
    }

    /// Character-level diff of `old` against `new`
    ///
    /// Without color, unchanged paths print once and changed paths print as
    /// `old -> new`.
    fn path_diff(&self, old: &str, new: &str) -> String {
        if !self.color {
            return if old == new {
                old.to_string()
            } else {
                format!("{old} -> {new}")
            };
        }

        let diff = TextDiff::from_chars(old, new);
        let mut output = String::new();
        for change in diff.iter_all_changes() {
            let color = match change.tag() {
                ChangeTag::Delete => RED,
                ChangeTag::Insert => GREEN,
                ChangeTag::Equal => {
                    output.push_str(change.value());
                    continue;
                }
            };
            output.push_str(color);
            output.push_str(change.value());
            output.push_str(RESET);
        }
        output
    }
}

fn kind_label(unit: &UnitReport) -> &'static str {
    match (unit.kind, &unit.content) {
        (EntryKind::Directory, _) => "Directory",
        (EntryKind::Symlink, _) => "Symlink",
        (EntryKind::Other, _) => "Special",
        (EntryKind::File, ContentOutcome::Binary) => "File (binary)",
        (EntryKind::File, _) => "File",
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use drename_core::rename::RenameOutcome;
    use std::path::PathBuf;

    fn unit(kind: EntryKind, content: ContentOutcome, rename: RenameOutcome) -> UnitReport {
        UnitReport {
            old_path: PathBuf::from("my_user.txt"),
            new_path: PathBuf::from("your_pet.txt"),
            kind,
            content,
            rename,
        }
    }

    #[test]
    fn test_kind_labels() {
        let u = unit(EntryKind::File, ContentOutcome::Binary, RenameOutcome::Renamed);
        assert_eq!(kind_label(&u), "File (binary)");

        let u = unit(EntryKind::File, ContentOutcome::NoMatch, RenameOutcome::Renamed);
        assert_eq!(kind_label(&u), "File");

        let u = unit(
            EntryKind::Directory,
            ContentOutcome::Structural,
            RenameOutcome::Renamed,
        );
        assert_eq!(kind_label(&u), "Directory");

        let u = unit(EntryKind::Other, ContentOutcome::Structural, RenameOutcome::Renamed);
        assert_eq!(kind_label(&u), "Special");
    }

    #[test]
    fn test_plain_path_diff() {
        let display = Display::new(false);
        assert_eq!(display.path_diff("a.txt", "a.txt"), "a.txt");
        assert_eq!(
            display.path_diff("my_user.txt", "your_pet.txt"),
            "my_user.txt -> your_pet.txt"
        );
    }

    #[test]
    fn test_colored_path_diff_marks_changes() {
        let display = Display::new(true);
        let output = display.path_diff("my_user", "my_pet");

        assert!(output.starts_with("my_"));
        assert!(output.contains(RED));
        assert!(output.contains(GREEN));
        assert!(output.contains("pet") || output.contains('p'));
    }

    #[test]
    fn test_colored_unchanged_path_has_no_escapes() {
        let display = Display::new(true);
        assert_eq!(display.path_diff("notes.md", "notes.md"), "notes.md");
    }

    #[test]
    fn test_row_includes_errors() {
        let display = Display::new(false);
        let u = unit(
            EntryKind::File,
            ContentOutcome::NoMatch,
            RenameOutcome::Conflict,
        );
        let row = display.unit_row(&u);

        assert!(row.starts_with("File"));
        assert!(row.contains("my_user.txt -> your_pet.txt"));
        assert!(row.ends_with("your_pet.txt (conflict)"));
    }
}
