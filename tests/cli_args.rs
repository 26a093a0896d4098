//! Integration tests for CLI argument handling
//!
//! Runs the built binary to verify argument parsing behavior that unit tests
//! cannot cover (usage errors, help output).

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hourcast"))
        .args(args)
        .output()
        .expect("Failed to execute hourcast")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hourcast"), "Help should mention hourcast");
    assert!(
        stdout.contains("--timezone"),
        "Help should mention the --timezone flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_missing_place_is_a_usage_error() {
    let output = run_cli(&[]);
    assert!(
        !output.status.success(),
        "Expected a missing place argument to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("PLACE") || stderr.contains("required"),
        "Should print a usage error about the place argument: {}",
        stderr
    );
}

#[test]
fn test_invalid_hours_value_is_rejected() {
    let output = run_cli(&["Ljubljana", "--hours", "many"]);
    assert!(!output.status.success());
}
