use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use super::IntegrationHarness;
use crate::support::profile_fixture::{ada_json, write_json};

/// Runs the CLI inside `dir`, isolated from any user config or log settings.
fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate_profile"))
        .args(args)
        .current_dir(dir)
        .env("PROFILEPAGE_CONFIG", dir.join("absent-config.toml"))
        .env_remove("PROFILEPAGE_LOG")
        .env_remove("PROFILEPAGE_LOG_FORMAT")
        .output()
        .expect("failed to launch generate_profile")
}

#[test]
fn missing_source_exits_with_not_found() {
    let harness = IntegrationHarness::new();

    let output = run_cli(harness.workspace_path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("profile.json not found."),
        "unexpected stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
    assert!(harness.entries().is_empty(), "no files expected");
}

#[test]
fn missing_field_exits_with_field_name() {
    let harness = IntegrationHarness::new();
    let mut profile = ada_json();
    profile["contact"]
        .as_object_mut()
        .expect("contact object")
        .remove("email");
    write_json(&harness.path("profile.json"), &profile);

    let output = run_cli(harness.workspace_path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contact.email"), "unexpected stderr: {stderr}");
    assert_eq!(harness.entries(), vec!["profile.json"]);
}

#[test]
fn default_run_writes_page_and_reports_success() -> Result<()> {
    let harness = IntegrationHarness::new();
    write_json(&harness.path("profile.json"), &ada_json());

    let output = run_cli(harness.workspace_path(), &[]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("profile.html generated successfully."), "{stdout}");
    let html = fs::read_to_string(harness.path("profile.html"))?;
    assert!(html.contains("<title>Ada Lovelace — Profile</title>"));
    Ok(())
}

#[test]
fn flags_override_config_file() -> Result<()> {
    let harness = IntegrationHarness::new();
    write_json(&harness.path("cli.json"), &ada_json());
    fs::write(
        harness.path("site.toml"),
        "[paths]\ninput = \"conf.json\"\noutput = \"conf.html\"\n\n[render]\nlang = \"de\"\n",
    )?;

    let output = run_cli(
        harness.workspace_path(),
        &["--config", "site.toml", "--input", "cli.json"],
    );
    assert!(output.status.success(), "{output:?}");
    let html = fs::read_to_string(harness.path("conf.html"))?;
    assert!(html.contains("<html lang=\"de\">"));
    assert!(!harness.path("profile.html").exists());
    Ok(())
}

#[test]
fn stdout_flag_prints_page_without_writing() {
    let harness = IntegrationHarness::new();
    write_json(&harness.path("profile.json"), &ada_json());

    let output = run_cli(harness.workspace_path(), &["--stdout"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!doctype html>"));
    assert!(stdout.contains("<li>Email: a@x.com</li>"));
    assert_eq!(harness.entries(), vec!["profile.json"]);
}
