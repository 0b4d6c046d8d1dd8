//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("master_config.json")
}

/// A command running in an empty directory so no settings file is discovered.
fn sku_config(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sku-config"));
    cmd.current_dir(dir.path())
        .env_remove("SKU_CONFIG_SKU")
        .env_remove("SKU_CONFIG_TIER")
        .env_remove("SKU_CONFIG_DOCUMENT")
        .env_remove("SKU_CONFIG_FORMAT");
    cmd
}

fn with_document(dir: &TempDir) -> Command {
    let mut cmd = sku_config(dir);
    cmd.arg("--document").arg(fixture());
    cmd
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    sku_config(&tmp).arg("--version").assert().success().stdout(predicate::str::contains("sku-config"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    sku_config(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("diff"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_list_marks_default() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard/Standard\n"))
        .stdout(predicate::str::contains("developer/developer (default)"));
}

#[test]
fn test_summarize_all_overrides() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .arg("summarize")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config Standard: DataPartitionDeploymentConfig updates - 2"))
        .stdout(predicate::str::contains("Config developer: DataPartitionDeploymentConfig updates - 2"))
        .stdout(predicate::str::contains("Config developer: MsiDataPlaneConfig updates - 1"))
        .stdout(predicate::str::contains("Config developer: ExampleSettings updates - 1"));
}

#[test]
fn test_summarize_selected_sku() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .args(["summarize", "--sku", "STANDARD", "--tier", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config Standard:"))
        .stdout(predicate::str::contains("Config developer:").not());
}

#[test]
fn test_diff_defaults_to_declared_sku() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config developer/developer"))
        .stdout(predicate::str::contains("DataPartitionDeploymentConfig.keyvaultSecretsRequired: true -> false"))
        .stdout(predicate::str::contains("DataPartitionDeploymentConfig.MaxDataPartitionCount: 10 -> 1"))
        .stdout(predicate::str::contains("MsiDataPlaneConfig.CMEKEnabled: true -> false"))
        .stdout(predicate::str::contains("ExampleSettings: not present in master, skipped"))
        .stdout(predicate::str::contains("MinDataPartitionCount").not());
}

#[test]
fn test_diff_restricted_to_group() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .args(["diff", "--group", "msidataplaneconfig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MsiDataPlaneConfig.CMEKEnabled"))
        .stdout(predicate::str::contains("DataPartitionDeploymentConfig").not());
}

#[test]
fn test_diff_unknown_group_fails() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .args(["diff", "--group", "NoSuchGroup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoSuchGroup"))
        .stderr(predicate::str::contains("expected one of: DataPartitionDeploymentConfig"));
}

#[test]
fn test_unknown_sku_fails() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .args(["diff", "--sku", "premium", "--tier", "premium"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("premium"));
}

#[test]
fn test_missing_document_fails() {
    let tmp = TempDir::new().expect("tmp");
    sku_config(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("master_config.json"));
}

#[test]
fn test_apply_writes_effective_configuration() {
    let tmp = TempDir::new().expect("tmp");
    let out = tmp.path().join("out").join("effective.json");
    with_document(&tmp)
        .args(["apply", "--sku", "Standard", "--tier", "Standard", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("DataPartitionDeploymentConfig.MaxDataPartitionCount: 10 -> 50"));

    let effective: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    let group = &effective["DataPartitionDeploymentConfig"];
    assert_eq!(group["MinDataPartitionCount"], 5);
    assert_eq!(group["MaxDataPartitionCount"], 50);
    assert_eq!(group["keyvaultSecretsRequired"], true);
    assert_eq!(group["DataPartitionId"], "dp-template");
    assert_eq!(effective["MsiDataPlaneConfig"]["ApiVersion"], "2019-09-01");
}

#[test]
fn test_apply_json_report_without_timestamp() {
    let tmp = TempDir::new().expect("tmp");
    let output = with_document(&tmp)
        .args(["--format", "json", "apply", "--no-timestamp"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["schema_version"], "1.0.0");
    assert!(report.get("generated_at").is_none());
    assert_eq!(report["sku"]["name"], "developer");
    assert_eq!(report["document"]["sha256"].as_str().map(str::len), Some(64));
    assert_eq!(report["changes"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["skipped"][0]["reason"], "group_absent");
    assert_eq!(report["effective"]["MsiDataPlaneConfig"]["CMEKEnabled"], false);
}

#[test]
fn test_settings_file_selects_sku() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("sku-config.toml"), "sku = 'standard'\ntier = 'standard'\n").expect("write");
    with_document(&tmp)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config Standard/Standard"));
}

#[test]
fn test_env_selects_sku() {
    let tmp = TempDir::new().expect("tmp");
    with_document(&tmp)
        .env("SKU_CONFIG_SKU", "Standard")
        .env("SKU_CONFIG_TIER", "Standard")
        .arg("summarize")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config Standard:"))
        .stdout(predicate::str::contains("Config developer:").not());
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().expect("tmp");
    sku_config(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sku-config"));
}
