//! End-to-end tests for the mytool binary

use assert_cmd::Command;
use predicates::prelude::*;

fn mytool() -> Command {
    Command::cargo_bin("mytool").unwrap()
}

#[test]
fn greet_prints_one_line_by_default() {
    mytool()
        .args(["greet", "Ada"])
        .assert()
        .success()
        .stdout("Hej Ada!\n");
}

#[test]
fn greet_repeats_with_times_flag() {
    mytool()
        .args(["greet", "Ada", "--times", "3"])
        .assert()
        .success()
        .stdout("Hej Ada!\nHej Ada!\nHej Ada!\n");
}

#[test]
fn greet_clamps_non_positive_times() {
    mytool()
        .args(["greet", "Ada", "-t", "-2"])
        .assert()
        .success()
        .stdout("Hej Ada!\n");
}

#[test]
fn greet_accepts_empty_name() {
    mytool()
        .args(["greet", ""])
        .assert()
        .success()
        .stdout("Hej !\n");
}

#[test]
fn sum_prints_floating_point_total() {
    mytool()
        .args(["sum", "1", "2", "3"])
        .assert()
        .success()
        .stdout("6.0\n");
}

#[test]
fn sum_accepts_floats() {
    mytool()
        .args(["sum", "1.5", "2.25"])
        .assert()
        .success()
        .stdout("3.75\n");
}

#[test]
fn sum_rejects_non_numeric_token() {
    mytool()
        .args(["sum", "1", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number: 'abc'"));
}

#[test]
fn sum_without_numbers_is_a_usage_error() {
    mytool()
        .arg("sum")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    mytool()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    mytool()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn verbose_flags_are_accepted() {
    mytool()
        .args(["-vv", "sum", "1"])
        .assert()
        .success()
        .stdout("1.0\n");
}
