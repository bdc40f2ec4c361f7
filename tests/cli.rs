//! Command-line interface integration tests for the noninterval binary.
//!
//! These verify argument validation, success scenarios, and the summary
//! logging the search emits.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn exit_success() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.arg("-f").arg("disk");
    cmd.arg("-t").arg("5");
    cmd.arg("--seed").arg("7");
    cmd.arg("-o").arg(output_dir.path());

    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_logs_summary() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.arg("-f").arg("ball");
    cmd.arg("-t").arg("3");
    cmd.arg("--seed").arg("1");
    cmd.arg("-o").arg(output_dir.path());
    cmd.env("RUST_LOG", "info");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("total success count"));

    Ok(())
}

#[test]
fn cli_no_args() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.assert().failure().stderr(predicate::str::contains(
        "error: the following required arguments were not provided:",
    ));

    Ok(())
}

#[test]
fn cli_invalid_family() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.arg("-f").arg("torus");
    cmd.arg("-t").arg("5");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'torus'"));

    Ok(())
}

#[test]
fn cli_invalid_dimension() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.arg("-f").arg("disk");
    cmd.arg("-t").arg("5");
    cmd.arg("-d").arg("1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("1 is not in 2.."));

    Ok(())
}

#[test]
fn cli_invalid_trials_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.arg("-f").arg("disk");
    cmd.arg("-t").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0 is not in 1.."));

    Ok(())
}

#[test]
fn cli_writes_into_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    // The output directory must exist after a run even when no witness was
    // found, so repeated runs never fail on a missing directory.
    let output_root = tempfile::tempdir()?;
    let output_dir = output_root.path().join("results");
    let mut cmd = Command::cargo_bin("noninterval")?;

    cmd.arg("-f").arg("disk");
    cmd.arg("-t").arg("2");
    cmd.arg("--seed").arg("3");
    cmd.arg("-o").arg(&output_dir);

    cmd.assert().success();
    assert!(output_dir.is_dir());

    Ok(())
}
