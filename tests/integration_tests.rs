use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    Command::cargo_bin("siteseek")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive site search"));
}

#[test]
fn test_cli_version_flag() {
    Command::cargo_bin("siteseek")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("siteseek"));
}

#[test]
fn test_cli_without_endpoint_fails_before_entering_the_tui() {
    // Point HOME at an empty directory so no user config leaks in
    let home = tempfile::tempdir().unwrap();

    Command::cargo_bin("siteseek")
        .unwrap()
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No search endpoint configured"));
}

#[test]
fn test_cli_rejects_unknown_flags() {
    Command::cargo_bin("siteseek")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure();
}
