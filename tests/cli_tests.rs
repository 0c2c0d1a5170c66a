//! Command-line surface tests. These never start the terminal UI.

use assert_cmd::Command;
use predicates::prelude::*;

fn clipmark() -> Command {
    Command::cargo_bin("clipmark").unwrap()
}

#[test]
fn test_help_lists_options() {
    clipmark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--bookmarks"));
}

#[test]
fn test_version() {
    clipmark()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    clipmark()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}
