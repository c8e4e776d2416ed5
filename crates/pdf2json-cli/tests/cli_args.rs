use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdf2json").unwrap()
}

#[test]
fn help_flag_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--pages"))
        .stdout(predicate::str::contains("--password"))
        .stdout(predicate::str::contains("--strategy"))
        .stdout(predicate::str::contains("--pretty"));
}

#[test]
fn version_flag_prints_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdf2json"));
}

#[test]
fn unknown_flag_is_rejected() {
    cmd()
        .arg("--format")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_strategy_is_rejected() {
    cmd()
        .args(["--strategy", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}
