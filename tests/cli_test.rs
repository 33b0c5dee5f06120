//! Integration tests for the toolenv binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GCC_DIR: &str = "Tools/gcc/v9.1.0/Linux";

fn setup_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let gcc = temp.path().join(GCC_DIR);
    for dir in [
        "include/c++/9.1.0/x86_64-pc-linux-gnu",
        "lib/gcc/x86_64-pc-linux-gnu/9.1.0/include",
    ] {
        fs::create_dir_all(gcc.join(dir)).unwrap();
    }
    temp
}

fn toolenv(repo: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("toolenv"));
    cmd.env_remove("DEVELOPMENT_ENVIRONMENT_FUNDAMENTAL")
        .env("NO_COLOR", "1")
        .arg("--project")
        .arg(repo);
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolenv"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("activation hooks"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolenv"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn activate_prints_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo();
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--platform", "linux", "--shell", "bash"])
        .args(["--fundamental-dir", "/opt/fw"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("#!/usr/bin/env bash"))
        .stdout(predicate::str::contains(
            "python \"/opt/fw/RepositoryBootstrap/SetupAndActivate/AcquireBinaries.py\" Verify \"GCC - 9.1.0\"",
        ))
        .stdout(predicate::str::contains(
            "export DEVELOPMENT_ENVIRONMENT_CPP_COMPILER_NAME=\"GCC-9\"",
        ))
        .stdout(predicate::str::contains("export CXX=\"gcc\""));
    Ok(())
}

#[test]
fn activate_reads_fundamental_dir_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo();
    let mut cmd = toolenv(repo.path());
    cmd.env("DEVELOPMENT_ENVIRONMENT_FUNDAMENTAL", "/env/fw")
        .args(["activate", "--platform", "linux", "--shell", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/env/fw/RepositoryBootstrap"));
    Ok(())
}

#[test]
fn activate_without_fundamental_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo();
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--platform", "linux", "--shell", "bash"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("DEVELOPMENT_ENVIRONMENT_FUNDAMENTAL"));
    Ok(())
}

#[test]
fn activate_missing_install_fails_with_path() -> Result<(), Box<dyn std::error::Error>> {
    let repo = TempDir::new()?;
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--platform", "linux", "--shell", "bash"])
        .args(["--fundamental-dir", "/opt/fw"]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Required directory is missing"))
        .stderr(predicate::str::contains("v9.1.0"));
    Ok(())
}

#[test]
fn activate_fast_skips_verification() -> Result<(), Box<dyn std::error::Error>> {
    let repo = TempDir::new()?;
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--fast", "--platform", "linux", "--shell", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("** FAST: Activating without verifying content."))
        .stdout(predicate::str::contains("export").not());
    Ok(())
}

#[test]
fn activate_on_windows_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let repo = TempDir::new()?;
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--platform", "windows", "--shell", "batch"]);
    cmd.assert().success().stdout("@echo off\n");
    Ok(())
}

#[test]
fn activate_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo();
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--platform", "linux", "--json"])
        .args(["--fundamental-dir", "/opt/fw"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let actions: serde_json::Value = serde_json::from_slice(&output)?;
    let kinds: Vec<&str> = actions
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["action"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["execute", "set", "set", "set", "augment"]);
    Ok(())
}

#[test]
fn activate_rejects_bad_tool_version() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo();
    let mut cmd = toolenv(repo.path());
    cmd.args(["activate", "--platform", "linux", "--tool-version", "gcc"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VERSION"));
    Ok(())
}

#[test]
fn manifest_lists_gcc() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo();
    let mut cmd = toolenv(repo.path());
    cmd.arg("manifest");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GCC - 9.1.0"))
        .stdout(predicate::str::contains("installed"));
    Ok(())
}

#[test]
fn scripts_reports_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let repo = TempDir::new()?;
    let mut cmd = toolenv(repo.path());
    cmd.arg("scripts");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("framework defaults"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("toolenv"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("toolenv"));
    Ok(())
}
