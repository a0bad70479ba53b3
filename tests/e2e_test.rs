//! End-to-end CLI tests. No network access: they exercise argument parsing
//! and configuration failure paths only.

use assert_cmd::Command;
use predicates::prelude::*;

fn partscout() -> Command {
    let mut cmd = Command::cargo_bin("partscout").unwrap();
    cmd.env_remove("PARTSCOUT_API_KEY");
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    partscout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("bulk"))
        .stdout(predicate::str::contains("bom-health"));
}

#[test]
fn test_missing_api_key_fails_with_hint() {
    partscout()
        .args(["find", "LM317"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PARTSCOUT_API_KEY"));
}

#[test]
fn test_invalid_bom_line_is_rejected() {
    partscout()
        .env("PARTSCOUT_API_KEY", "test-key")
        .args(["bom-health", "missing-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MANUFACTURER=PART_NUMBER"));
}

#[test]
fn test_bom_health_requires_at_least_one_part() {
    partscout().arg("bom-health").assert().failure();
}
