use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-tally"));
    cmd.arg("tests/fixtures/catalog.csv")
        .arg("tests/fixtures/sales.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| Product Name    | Total Units Sold|"))
        // Units: A=10+2+7, F=1+0+3
        .stdout(predicate::str::contains(format!(
            "| {:<15} | {:>15} |",
            "Product A", "19"
        )))
        .stdout(predicate::str::contains(format!(
            "| {:<15} | {:>15} |",
            "Product F", "4"
        )))
        // 32.30 + 38.60 + 52.00
        .stdout(predicate::str::contains(format!(
            "| Total Daily Profits: ${:>11} |",
            "122.90"
        )))
        // NORTH earns 32.30, the lowest of the three branches
        .stdout(predicate::str::contains(format!("| {:<30}    |", "NORTH")));

    Ok(())
}

#[test]
fn test_cli_worker_count_does_not_change_output() -> Result<(), Box<dyn std::error::Error>> {
    let run = |workers: &str| {
        let mut cmd = Command::new(cargo_bin!("sales-tally"));
        cmd.arg("tests/fixtures/catalog.csv")
            .arg("tests/fixtures/sales.csv")
            .arg("--workers")
            .arg(workers);
        cmd.output().expect("failed to execute command")
    };

    let single = run("1");
    assert!(single.status.success());
    for workers in ["2", "16"] {
        let pooled = run(workers);
        assert!(pooled.status.success());
        assert_eq!(single.stdout, pooled.stdout);
    }
    Ok(())
}

#[test]
fn test_cli_rejects_zero_workers() {
    let mut cmd = Command::new(cargo_bin!("sales-tally"));
    cmd.arg("tests/fixtures/catalog.csv")
        .arg("tests/fixtures/sales.csv")
        .arg("--workers")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--workers must be at least 1"));
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("sales-tally"));
    cmd.arg("tests/fixtures/catalog.csv")
        .arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
