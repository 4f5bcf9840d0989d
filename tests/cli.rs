//! End-to-end CLI tests
//!
//! Drives the `onsplit` binary through a full wizard session with the
//! data directory pointed at a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn onsplit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("onsplit").unwrap();
    cmd.env("ONSPLIT_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_then_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    onsplit(&dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized OnSplit"));

    onsplit(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft file"));
}

#[test]
fn member_add_list_remove() {
    let dir = TempDir::new().unwrap();

    onsplit(&dir)
        .args(["member", "add", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added member Alice"));

    onsplit(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    onsplit(&dir)
        .args(["member", "remove", "Alice"])
        .assert()
        .success();

    onsplit(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No members yet"));
}

#[test]
fn next_on_empty_draft_reports_field_errors() {
    let dir = TempDir::new().unwrap();

    onsplit(&dir)
        .args(["expense", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title"))
        .stdout(predicate::str::contains("amount"));
}

#[test]
fn skipping_ahead_fails_with_state_unchanged() {
    let dir = TempDir::new().unwrap();

    onsplit(&dir)
        .args(["expense", "goto", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot skip ahead"));

    onsplit(&dir)
        .args(["expense", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/6"));
}

#[test]
fn full_wizard_flow_commits_and_clears_draft() {
    let dir = TempDir::new().unwrap();

    for name in ["Alice", "Bob", "Carol", "Dave"] {
        onsplit(&dir).args(["member", "add", name]).assert().success();
    }

    onsplit(&dir)
        .args(["expense", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/6"));

    onsplit(&dir)
        .args(["expense", "set", "--title", "Dinner", "--amount", "100"])
        .assert()
        .success();

    // details -> receipts -> split
    onsplit(&dir).args(["expense", "next"]).assert().success();
    onsplit(&dir).args(["expense", "next"]).assert().success();

    onsplit(&dir)
        .args(["expense", "split", "equal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$25.00"))
        .stdout(predicate::str::contains("balanced"));

    // split -> items -> payment
    onsplit(&dir).args(["expense", "next"]).assert().success();
    onsplit(&dir).args(["expense", "next"]).assert().success();

    onsplit(&dir)
        .args(["expense", "payment", "wallet-usdc"])
        .assert()
        .success();

    // payment -> review
    onsplit(&dir).args(["expense", "next"]).assert().success();
    onsplit(&dir)
        .args(["expense", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All steps complete"));

    onsplit(&dir)
        .args(["expense", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success"))
        .stdout(predicate::str::contains("Dinner"));

    // Draft cleared; a fresh session starts at step 1
    onsplit(&dir)
        .args(["expense", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/6"))
        .stdout(predicate::str::contains("(untitled)"));

    onsplit(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("$100.00"));

    onsplit(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"));

    onsplit(&dir)
        .args(["export", "csv", "--shares"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("$25.00"));
}

#[test]
fn abandoned_draft_resumes_across_invocations() {
    let dir = TempDir::new().unwrap();

    onsplit(&dir)
        .args(["expense", "set", "--title", "Road trip", "--amount", "60"])
        .assert()
        .success();

    onsplit(&dir).args(["expense", "next"]).assert().success();
    onsplit(&dir).args(["expense", "next"]).assert().success();

    // A later invocation picks up step 3 with the earlier data intact
    onsplit(&dir)
        .args(["expense", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3/6"))
        .stdout(predicate::str::contains("Road trip"));
}

#[test]
fn corrupt_draft_file_starts_fresh() {
    let dir = TempDir::new().unwrap();

    onsplit(&dir).args(["init"]).assert().success();
    std::fs::write(dir.path().join("data").join("draft.json"), "not json").unwrap();

    onsplit(&dir)
        .args(["expense", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/6"));
}

#[test]
fn itemized_step_tracks_unassigned_amount() {
    let dir = TempDir::new().unwrap();

    for name in ["Alice", "Bob"] {
        onsplit(&dir).args(["member", "add", name]).assert().success();
    }

    onsplit(&dir)
        .args(["expense", "set", "--title", "Dinner", "--amount", "30.50"])
        .assert()
        .success();

    onsplit(&dir)
        .args([
            "expense", "item", "add", "Pasta", "18.50", "--assign", "Alice,Bob",
        ])
        .assert()
        .success();

    onsplit(&dir)
        .args(["expense", "item", "add", "Dessert", "12.00"])
        .assert()
        .success();

    onsplit(&dir)
        .args(["expense", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unassigned amount: $12.00"))
        .stdout(predicate::str::contains("$9.25"));
}
