//! CLI integration tests for the `larder` binary.
//!
//! These tests run the compiled binary via `std::process::Command`. None of
//! them reach the network: offline commands are checked for output, and
//! `cook` is only run in ways that fail before any request is sent.

use std::process::Command;

/// Build a `Command` pointing at the compiled `larder` binary.
///
/// The API key variable is removed so a developer's real key can never be
/// used, and tracing output is suppressed.
fn larder_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_larder"));
    cmd.env_remove("OPENAI_API_KEY");
    cmd.env("RUST_LOG", "off");
    cmd
}

// ── Version and help ────────────────────────────────────────────────────

#[test]
fn version_output() {
    let output = larder_bin()
        .arg("--version")
        .output()
        .expect("failed to run larder");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("larder") && stdout.contains(env!("CARGO_PKG_VERSION")),
        "version output should contain name and version, got: {stdout}"
    );
}

#[test]
fn help_lists_subcommands() {
    let output = larder_bin()
        .arg("--help")
        .output()
        .expect("failed to run larder");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["cook", "normalize", "suggest"] {
        assert!(stdout.contains(sub), "help should mention {sub}, got: {stdout}");
    }
}

// ── normalize ───────────────────────────────────────────────────────────

#[test]
fn normalize_prints_clean_names() {
    let output = larder_bin()
        .args(["normalize", "  Chicken! ", "rice,", "a", "the", ""])
        .output()
        .expect("failed to run larder");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Chicken\nRice\n");
}

#[test]
fn normalize_batches() {
    let output = larder_bin()
        .args([
            "normalize",
            "--batch",
            "--batch-size",
            "2",
            "eggs, milk, flour",
        ])
        .output()
        .expect("failed to run larder");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Batch 1: Eggs, Milk\nBatch 2: Flour\n");
}

// ── suggest ─────────────────────────────────────────────────────────────

#[test]
fn suggest_lists_ingredients_and_tips() {
    let output = larder_bin()
        .arg("suggest")
        .output()
        .expect("failed to run larder");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bell peppers"));
    assert!(stdout.contains("Oranges"));
    assert!(stdout.contains("Limit sodium to support heart health"));
}

// ── cook (offline failures) ─────────────────────────────────────────────

#[test]
fn cook_without_input_is_rejected() {
    let output = larder_bin()
        .arg("cook")
        .output()
        .expect("failed to run larder");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--ingredients"), "got: {stderr}");
}

#[test]
fn cook_without_api_key_fails_with_configuration_error() {
    let output = larder_bin()
        .args(["cook", "--ingredients", "eggs, milk"])
        .output()
        .expect("failed to run larder");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration error"), "got: {stderr}");
    assert!(stderr.contains("OPENAI_API_KEY"), "got: {stderr}");
}

#[test]
fn cook_with_missing_config_file_fails() {
    let output = larder_bin()
        .args([
            "--config",
            "/tmp/.larder-test-nonexistent-config.json",
            "cook",
            "-i",
            "eggs",
        ])
        .output()
        .expect("failed to run larder");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"), "got: {stderr}");
}

#[test]
fn cook_reads_api_key_variable_from_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut config,
        br#"{"provider": {"api_key_env": "LARDER_CLI_TEST_UNSET_KEY"}}"#,
    )
    .unwrap();

    let output = larder_bin()
        .env_remove("LARDER_CLI_TEST_UNSET_KEY")
        .arg("--config")
        .arg(config.path())
        .args(["cook", "-i", "eggs"])
        .output()
        .expect("failed to run larder");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("LARDER_CLI_TEST_UNSET_KEY"), "got: {stderr}");
}
