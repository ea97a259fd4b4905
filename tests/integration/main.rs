//! Integration tests for the repodeps CLI
//!
//! These tests run the binary against temporary job directories, testing
//! the full cycle of: add → list → edit → check → remove


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"
[forks.acme-robotics.repositories]
robot_controller = ["main", "develop"]
vision = ["main"]

[forks.upstream.repositories]
planner = ["main", "next"]
"#;

/// Helper function to create a repodeps command isolated from the user's config
fn repodeps(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("repodeps"));
    cmd.current_dir(dir).env("REPODEPS_HOME", dir.join("home"));
    cmd
}

/// Helper to write the test catalog into a directory
fn write_catalog(dir: &Path) -> String {
    let path = dir.join("catalog.toml");
    fs::write(&path, CATALOG).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    repodeps(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repodeps"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    repodeps(temp.path()).assert().success().stdout(predicate::str::contains("repodeps v"));
}

#[test]
fn test_add_writes_job_file() {
    let temp = TempDir::new().unwrap();

    repodeps(temp.path())
        .args(["add", "robot_controller", "--fork", "acme-robotics", "--branch", "develop"])
        .arg("--poll")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added robot_controller (git@github.com:acme-robotics/robot_controller.git)",
        ));

    let content = fs::read_to_string(temp.path().join(".repodeps.toml")).unwrap();
    assert!(content.contains("[[repository]]"));
    assert!(content.contains("branch = \"develop\""));
    assert!(content.contains("poll = true"));
    assert!(content.contains("test = false"));
}

#[test]
fn test_add_duplicate_fails() {
    let temp = TempDir::new().unwrap();
    repodeps(temp.path()).args(["add", "a", "--fork", "o"]).assert().success();

    repodeps(temp.path())
        .args(["add", "a", "--fork", "p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository already listed: a"));
}

#[test]
fn test_add_uses_configured_defaults() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    fs::write(
        home.join("config.toml"),
        "[defaults]\nfork = \"acme-robotics\"\nbranch = \"main\"\ntest = true\n",
    )
    .unwrap();

    repodeps(temp.path()).args(["add", "vision"]).assert().success();

    repodeps(temp.path())
        .args(["--json", "show", "vision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fork\": \"acme-robotics\""))
        .stdout(predicate::str::contains("\"branch\": \"main\""))
        .stdout(predicate::str::contains("\"test\": true"));
}

#[test]
fn test_add_flag_overrides_configured_default() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    fs::create_dir_all(&home).unwrap();
    fs::write(home.join("config.toml"), "[defaults]\npoll = true\ntest = true\n").unwrap();

    repodeps(temp.path()).args(["add", "vision", "--fork", "o", "--test=false"]).assert().success();

    repodeps(temp.path())
        .args(["--json", "show", "vision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"poll\": true"))
        .stdout(predicate::str::contains("\"test\": false"));
}

#[test]
fn test_config_sets_defaults_for_add() {
    let temp = TempDir::new().unwrap();

    repodeps(temp.path())
        .args(["config", "--fork", "acme-robotics", "--branch", "main", "--poll", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let content = fs::read_to_string(temp.path().join("home/config.toml")).unwrap();
    assert!(content.contains("fork = \"acme-robotics\""));

    repodeps(temp.path())
        .args(["--json", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"updated\": false"))
        .stdout(predicate::str::contains("\"branch\": \"main\""));

    repodeps(temp.path()).args(["add", "vision"]).assert().success();
    repodeps(temp.path())
        .args(["--json", "show", "vision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"url\": \"git@github.com:acme-robotics/vision.git\""))
        .stdout(predicate::str::contains("\"poll\": true"));
}

#[test]
fn test_list_is_sorted() {
    let temp = TempDir::new().unwrap();
    for name in ["zeta", "alpha", "mid"] {
        repodeps(temp.path()).args(["add", name, "--fork", "o"]).assert().success();
    }

    let output = repodeps(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let alpha = stdout.find("alpha").unwrap();
    let mid = stdout.find("mid").unwrap();
    let zeta = stdout.find("zeta").unwrap();
    assert!(alpha < mid && mid < zeta);
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    repodeps(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories configured."));
}

#[test]
fn test_show_missing_fails() {
    let temp = TempDir::new().unwrap();
    repodeps(temp.path())
        .args(["show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository not found: ghost"));
}

#[test]
fn test_explicit_file_flag() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("jobs/nightly.toml");

    repodeps(temp.path())
        .arg("--file")
        .arg(&file)
        .args(["add", "a", "--fork", "o"])
        .assert()
        .success();

    assert!(file.exists());
    assert!(!temp.path().join(".repodeps.toml").exists());
}

#[test]
fn test_candidates_from_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    repodeps(temp.path())
        .args(["candidates", "branches", "--name", "robot_controller"])
        .args(["--fork", "acme-robotics", "--catalog", &catalog])
        .assert()
        .success()
        .stdout("develop\nmain\n");

    repodeps(temp.path())
        .args(["--json", "candidates", "forks", "--catalog", &catalog])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"field\": \"forks\""))
        .stdout(predicate::str::contains("\"upstream\""));
}

#[test]
fn test_candidates_without_catalog_fails() {
    let temp = TempDir::new().unwrap();
    repodeps(temp.path())
        .args(["candidates", "forks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalog given"));
}
