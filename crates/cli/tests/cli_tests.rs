//! CLI integration tests

use std::io::Write;
use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "shard-planner-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("Shard Planner"), "Should show app name");
    assert!(stdout.contains("put-template"), "Should show put-template command");
    assert!(stdout.contains("inspect"), "Should show inspect command");
    assert!(stdout.contains("--config"), "Should show config option");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "shard-planner-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("shard-planner"), "Should show binary name");
}

/// Test put-template subcommand help
#[test]
fn test_put_template_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "shard-planner-cli", "--", "put-template", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Put-template help should succeed");
    assert!(stdout.contains("--index-pattern"), "Should show index-pattern option");
    assert!(stdout.contains("--use-data-nodes"), "Should show use-data-nodes option");
    assert!(
        stdout.contains("--number-of-shards"),
        "Should show number-of-shards option"
    );
    assert!(stdout.contains("--dry-run"), "Should show dry-run option");
}

/// Test inspect subcommand help
#[test]
fn test_inspect_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "shard-planner-cli", "--", "inspect", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Inspect help should succeed");
    assert!(stdout.contains("--index-pattern"), "Should show index-pattern option");
}

/// Test that a missing configuration file fails with a non-zero exit
#[test]
fn test_missing_config_fails() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "shard-planner-cli",
            "--",
            "--config",
            "/nonexistent/template.ini",
            "put-template",
            "--index-pattern",
            "metrics_*",
            "--use-data-nodes",
            "true",
        ])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "Missing config should fail");
    assert!(
        stderr.contains("Failed to load configuration"),
        "Should explain the failure"
    );
}

/// Test that a configuration without the window key is rejected at startup
#[test]
fn test_incomplete_config_fails() {
    let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
    writeln!(
        file,
        "[ELASTICSEARCH_PROPERTIES]\nhostname = localhost\nport = 9200\nscheme = http\nusername =\npassword ="
    )
    .unwrap();

    let output = Command::new("cargo")
        .args(["run", "-p", "shard-planner-cli", "--", "--config"])
        .arg(file.path())
        .args([
            "put-template",
            "--index-pattern",
            "metrics_*",
            "--use-data-nodes",
            "true",
            "--dry-run",
        ])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "Incomplete config should fail");
    assert!(
        stderr.contains("number_of_days_to_sample"),
        "Should name the missing key"
    );
}
