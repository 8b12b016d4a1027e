use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn linkhub() -> Command {
    Command::cargo_bin("linkhub").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    linkhub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("theme"));
}

#[test]
fn test_paged_and_wide_conflict() {
    linkhub()
        .args(["list", "--paged", "--wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
