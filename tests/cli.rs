//! CLI-level tests: argument validation must fail before any work begins.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("domain-sweep").expect("binary builds")
}

#[test]
fn test_help_lists_subcommands() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sweep"))
        .stdout(predicate::str::contains("random"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_random_rejects_zero_count() {
    bin()
        .args(["random", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_random_rejects_non_numeric_count() {
    bin().args(["random", "lots"]).assert().failure();
}

#[test]
fn test_sweep_rejects_zero_threads() {
    bin()
        .args(["sweep", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_check_rejects_invalid_base() {
    bin()
        .args(["check", "my domain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_check_rejects_dotted_base() {
    bin().args(["check", "my.domain"]).assert().failure();
}
