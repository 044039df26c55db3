use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drename() -> Command {
    let mut cmd = Command::cargo_bin("drename").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn sample_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("my_user")).unwrap();
    fs::write(
        tmp.path().join("my_user/my_user.rs"),
        "struct MyUser;\nconst MY_USER: &str = \"my-user\";\n",
    )
    .unwrap();
    fs::write(tmp.path().join("notes.md"), "nothing here\n").unwrap();
    tmp
}

#[test]
fn test_help_output() {
    drename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Case-aware rename"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--no-config"))
        .stdout(predicate::str::contains("<OLD>"))
        .stdout(predicate::str::contains("<NEW>"));
}

#[test]
fn test_short_help_uses_command_summary() {
    drename()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Case-aware rename across a directory tree",
        ));
}

#[test]
fn test_version_output() {
    drename()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_missing_arguments() {
    drename().arg("my/user").assert().failure();
}

#[test]
fn test_identical_identifiers_rejected() {
    let tmp = sample_tree();

    drename()
        .args(["my_user", "my/user", "--no-config"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Old and new are the same. No actions will be taken.",
        ));

    assert!(tmp.path().join("my_user/my_user.rs").exists());
}

#[test]
fn test_config_flags_conflict() {
    drename()
        .args(["my/user", "your/pet", "--config", "x.toml", "--no-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_config_file() {
    let tmp = sample_tree();

    drename()
        .args(["my/user", "your/pet", "--config"])
        .arg(tmp.path().join("missing.toml"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_missing_root() {
    let tmp = TempDir::new().unwrap();

    drename()
        .args(["my/user", "your/pet", "--no-config"])
        .arg(tmp.path().join("nope"))
        .assert()
        .failure();
}

#[test]
fn test_dry_run_leaves_tree_unchanged() {
    let tmp = sample_tree();

    drename()
        .args(["my/user", "your/pet", "--dry-run", "--no-config", "--no-color"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("my_user -> your_pet"))
        .stdout(predicate::str::contains("MyUser -> YourPet"))
        .stdout(predicate::str::contains("Rename Summary (dry run)"));

    assert!(tmp.path().join("my_user/my_user.rs").exists());
    assert!(!tmp.path().join("your_pet").exists());
    let content = fs::read_to_string(tmp.path().join("my_user/my_user.rs")).unwrap();
    assert!(content.contains("MyUser"));
}

#[test]
fn test_live_run_renames_and_rewrites() {
    let tmp = sample_tree();

    drename()
        .args(["my/user", "your/pet", "--no-config", "--no-color"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory"))
        .stdout(predicate::str::contains("Status: ✓ Success"));

    let renamed = tmp.path().join("your_pet/your_pet.rs");
    assert!(renamed.exists());
    assert!(!tmp.path().join("my_user").exists());
    assert_eq!(
        fs::read_to_string(renamed).unwrap(),
        "struct YourPet;\nconst YOUR_PET: &str = \"your-pet\";\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("notes.md")).unwrap(),
        "nothing here\n"
    );
}

#[test]
fn test_project_config_is_applied() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("big.txt"), "my_user ".repeat(64)).unwrap();
    fs::write(
        tmp.path().join("limits.toml"),
        "max_file_size = 16\n",
    )
    .unwrap();

    drename()
        .args(["my/user", "your/pet", "--no-color", "--config"])
        .arg(tmp.path().join("limits.toml"))
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds maximum limit"))
        .stdout(predicate::str::contains("Completed with errors"));

    let content = fs::read_to_string(tmp.path().join("big.txt")).unwrap();
    assert!(content.starts_with("my_user"));
}
