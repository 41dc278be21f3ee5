//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! OUTLAY_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn outlay(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("outlay").unwrap();
    cmd.env("OUTLAY_DATA_DIR", dir.path());
    cmd
}

#[test]
fn add_then_list_shows_expense() {
    let dir = TempDir::new().unwrap();

    outlay(&dir)
        .args(["add", "12.50", "Lunch", "--category", "food", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    outlay(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn list_filters_are_conjunctive() {
    let dir = TempDir::new().unwrap();

    outlay(&dir)
        .args(["add", "10", "Lunch", "--category", "food", "--date", "2024-01-15"])
        .assert()
        .success();
    outlay(&dir)
        .args(["add", "5", "Coffee beans", "--category", "shopping", "--date", "2024-01-16"])
        .assert()
        .success();

    // No food expense mentions coffee
    outlay(&dir)
        .args(["list", "--category", "food", "--search", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn invalid_sort_spec_fails() {
    let dir = TempDir::new().unwrap();

    outlay(&dir)
        .args(["list", "--sort", "price-asc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort specification"));
}

#[test]
fn budget_status_warns_at_eighty_percent() {
    let dir = TempDir::new().unwrap();

    outlay(&dir)
        .args(["add", "50", "Groceries", "--category", "food", "--date", "2024-01-01"])
        .assert()
        .success();
    outlay(&dir)
        .args(["add", "30", "Takeout", "--category", "food", "--date", "2024-01-02"])
        .assert()
        .success();

    outlay(&dir)
        .args(["budget", "set", "food", "100"])
        .assert()
        .success();

    outlay(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80.0%"))
        .stdout(predicate::str::contains("remaining $20.00"));
}

#[test]
fn export_writes_quoted_csv() {
    let dir = TempDir::new().unwrap();

    outlay(&dir)
        .args(["add", "12.50", "Lunch \"special\"", "--category", "food", "--date", "2024-01-15"])
        .assert()
        .success();

    outlay(&dir)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date,Category,Description,Amount"))
        .stdout(predicate::str::contains("2024-01-15,Food,\"Lunch \"\"special\"\"\",12.50"));
}

#[test]
fn corrupt_store_recovers_to_empty() {
    let dir = TempDir::new().unwrap();

    // Seed a data dir with a corrupt expense document
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("expenses.json"), "{broken").unwrap();

    outlay(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    outlay(&dir)
        .args(["delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}
