//! Command-line surface tests
//!
//! Argument parsing, help output and completions.

mod common;

use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let home = common::TestHome::new();
    home.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update-all"))
        .stdout(predicate::str::contains("add-repo"))
        .stdout(predicate::str::contains("list-repos"));
}

#[test]
fn test_install_help_shows_examples() {
    let home = common::TestHome::new();
    home.cmd()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--from-url"))
        .stdout(predicate::str::contains("--add-desktop"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_version_flag() {
    let home = common::TestHome::new();
    home.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tarman"));
}

#[test]
fn test_unknown_command_fails() {
    let home = common::TestHome::new();
    home.cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_url_and_repo_flags_conflict() {
    let home = common::TestHome::new();
    home.cmd()
        .args(["install", "-u", "-r", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_install_without_input_fails() {
    let home = common::TestHome::new();
    home.cmd()
        .args(["install", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing package to install"));
}

#[test]
fn test_completions_bash() {
    let home = common::TestHome::new();
    home.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tarman"));
}

#[test]
fn test_completions_unknown_shell() {
    let home = common::TestHome::new();
    home.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_completions_do_not_create_home() {
    let home = common::TestHome::new();
    home.cmd().args(["completions", "zsh"]).assert().success();
    assert!(!home.home.exists());
}
