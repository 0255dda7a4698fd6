//! Tests that run the built `oracle` binary.
//!
//! These cover what only `main` does: clap parsing, environment variable
//! fallbacks, and mapping errors to stderr and the exit code.
//!
//! ```bash
//! cargo test -p oracle-cli --test cli_binary
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

/// Result of running the oracle CLI.
#[derive(Debug)]
struct CliResult {
    success: bool,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CliResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }
}

/// Runs the binary with `envs` set and the oracle variables otherwise cleared.
fn run_cli(work_dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> CliResult {
    let mut command = Command::new(env!("CARGO_BIN_EXE_oracle"));
    command
        .args(args)
        .current_dir(work_dir)
        .env("NO_COLOR", "1")
        .env_remove("ORACLE_OUT_DIR")
        .env_remove("ORACLE_EXPORT_STAGGER_MS");
    for (key, value) in envs {
        command.env(key, value);
    }
    CliResult::from_output(command.output().expect("Failed to run oracle binary"))
}

#[test]
fn test_export_all_uses_out_dir_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let env_dir = dir.path().join("env");
    let result = run_cli(
        dir.path(),
        &["symbols", "export-all", "--manifest"],
        &[("ORACLE_OUT_DIR", env_dir.to_str().unwrap())],
    );
    result.assert_success();

    for key in ["sun", "leaf", "flame", "star", "moon"] {
        assert!(env_dir.join(format!("order_{}.svg", key)).is_file());
    }
    assert!(env_dir.join("manifest.json").is_file());
    // Nothing lands in the working directory.
    assert!(!dir.path().join("order_sun.svg").exists());
}

#[test]
fn test_export_all_uses_stagger_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    let start = Instant::now();
    let result = run_cli(
        dir.path(),
        &["symbols", "export-all"],
        &[("ORACLE_OUT_DIR", out_dir), ("ORACLE_EXPORT_STAGGER_MS", "10")],
    );
    result.assert_success();
    // Four pauses between five files.
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[test]
fn test_unwritable_chart_path_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    let result = run_cli(
        dir.path(),
        &["chart", "-s", "8", "--out", "blocker/x.svg"],
        &[],
    );
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("error:"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("Failed to create directory"));
}

#[test]
fn test_chart_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("existing.svg");
    fs::write(&target, "hello").unwrap();

    let result = run_cli(dir.path(), &["chart", "--out", "existing.svg"], &[]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");

    run_cli(dir.path(), &["chart", "--out", "existing.svg", "--force"], &[]).assert_success();
    assert!(fs::read_to_string(&target).unwrap().starts_with("<svg"));
}

#[test]
fn test_out_of_range_die_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_cli(dir.path(), &["dist", "--sides", "3"], &[]);
    assert!(!result.success);
    assert_ne!(result.exit_code, 0);
    assert!(result.stderr.contains("out of range"), "stderr: {}", result.stderr);
}

#[test]
fn test_dist_json_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_cli(dir.path(), &["dist", "--sides", "d6", "--json"], &[]);
    result.assert_success();
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["result"]["statistics"]["mode"], 6);
}
