//! Integration tests for glerbl CLI

use assert_cmd::Command;
use git2::Repository;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scratch repository with helpers for writing and staging files
struct TestRepo {
    dir: TempDir,
    repo: Repository,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self { dir, repo }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, content: &str) -> &Self {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    fn stage(&self, name: &str, content: &str) -> &Self {
        self.write(name, content);
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        self
    }

    fn config(&self, hooks: &str) -> &Self {
        self.write("glerbl.toml", &format!("[hooks]\npre-commit = {hooks}\n"))
    }

    fn glerbl(&self) -> Command {
        let mut cmd = Command::cargo_bin("glerbl").unwrap();
        cmd.arg("-C").arg(self.path()).env_remove("RUST_LOG");
        cmd
    }
}

/// Test CLI binary exists and responds to -h and --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("glerbl").unwrap();
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("fail-slow git hook checks"));

    let mut cmd = Command::cargo_bin("glerbl").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("every violation"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("glerbl").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glerbl"));
}

#[test]
fn test_trailing_whitespace_rejects_commit() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace"]"#)
        .stage("notes.txt", "first line\nsecond line \nthird\n");

    repo.glerbl()
        .args(["run", "pre-commit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no_trailing_whitespace"))
        .stderr(predicate::str::contains("notes.txt"))
        .stderr(predicate::str::contains(":2"));
}

#[test]
fn test_clean_tree_passes() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace"]"#)
        .stage("notes.txt", "first line\nsecond line\n");

    repo.glerbl()
        .args(["run", "pre-commit"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("no_trailing_whitespace"))
        .stdout(predicate::str::contains("pre-commit passed"));
}

#[test]
fn test_all_failures_are_reported_in_order() {
    let repo = TestRepo::new();
    repo.config(r#"["no_before_commit", "no_trailing_whitespace"]"#)
        .write("BEFORE_COMMIT", "bump the version\n")
        .stage("src/lib.rs", "pub fn f() {} \n");

    let assert = repo
        .glerbl()
        .args(["run", "pre-commit", "--format", "json"])
        .assert()
        .code(1);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["hook"], "pre-commit");
    assert_eq!(report["verdict"], "fail");

    let checks = report["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0]["identifier"], "no_before_commit");
    assert_eq!(checks[0]["status"], "fail");
    assert_eq!(checks[0]["locations"][0]["path"], "BEFORE_COMMIT");
    assert_eq!(checks[1]["identifier"], "no_trailing_whitespace");
    assert_eq!(checks[1]["status"], "fail");
    assert_eq!(checks[1]["locations"][0]["path"], "src/lib.rs");
    assert_eq!(checks[1]["locations"][0]["line"], 1);
}

#[test]
fn test_verbose_json_report_keeps_stdout_parseable() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace"]"#)
        .stage("notes.txt", "dirty \n");

    let assert = repo
        .glerbl()
        .args(["-v", "run", "pre-commit", "--format", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Checking 1 file(s)"));

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["checks"][0]["locations"][0]["line"], 1);
}

#[test]
fn test_partially_staged_file_is_judged_by_working_tree() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace"]"#)
        .stage("notes.txt", "dirty \n")
        .write("notes.txt", "clean\n");

    repo.glerbl().args(["run", "pre-commit"]).assert().code(0);
}

#[test]
fn test_unknown_check_is_a_configuration_error() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace", "no_such_check"]"#)
        .stage("notes.txt", "dirty \n");

    repo.glerbl()
        .args(["run", "pre-commit", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no_such_check"));
}

#[test]
fn test_default_configuration_runs_all_builtin_checks() {
    let repo = TestRepo::new();
    repo.stage("café.txt", "bonjour\n").stage("ok.txt", "fine\n");

    let assert = repo
        .glerbl()
        .args(["run", "pre-commit", "--format", "json"])
        .assert()
        .code(1);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let checks = report["checks"].as_array().unwrap();
    let identifiers: Vec<_> = checks.iter().map(|c| c["identifier"].as_str().unwrap()).collect();
    assert_eq!(
        identifiers,
        vec![
            "no_before_commit",
            "no_non_ascii_filenames",
            "no_trailing_whitespace"
        ]
    );
    assert_eq!(checks[0]["status"], "pass");
    assert_eq!(checks[1]["status"], "fail");
    assert_eq!(checks[1]["locations"][0]["path"], "café.txt");
    assert_eq!(checks[2]["status"], "pass");
}

#[test]
fn test_only_staged_files_are_checked() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace"]"#)
        .stage("staged.txt", "clean\n")
        .write("unstaged.txt", "dirty \n");

    repo.glerbl().args(["run", "pre-commit"]).assert().code(0);

    repo.glerbl()
        .args(["run", "pre-commit", "--files", "unstaged.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unstaged.txt"));
}

#[test]
fn test_unconfigured_hook_passes() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace"]"#)
        .stage("notes.txt", "dirty \n");

    repo.glerbl().args(["run", "pre-push"]).assert().code(0);
}

#[test]
fn test_unknown_hook_name_is_rejected() {
    let repo = TestRepo::new();

    repo.glerbl()
        .args(["run", "pre-party"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pre-party"));
}

#[test]
fn test_list_shows_configured_order() {
    let repo = TestRepo::new();
    repo.config(r#"["no_trailing_whitespace", "no_before_commit"]"#);

    repo.glerbl()
        .args(["list", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. no_trailing_whitespace"))
        .stdout(predicate::str::contains("2. no_before_commit"));
}

#[test]
fn test_config_validate() {
    let repo = TestRepo::new();
    repo.config(r#"["no_before_commit"]"#);
    repo.glerbl().args(["config", "validate"]).assert().success();

    repo.config(r#"["no_before_commit", "no_before_commit"]"#);
    repo.glerbl()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("more than once"));
}
