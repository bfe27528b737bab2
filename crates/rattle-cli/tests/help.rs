use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn rattle() -> Command {
    Command::cargo_bin("rattle").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    rattle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deals"))
        .stdout(predicate::str::contains("pipeline"))
        .stdout(predicate::str::contains("leaderboard"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_deals_list_help_lists_filters() {
    rattle()
        .args(["deals", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("at-risk"))
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    rattle()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
