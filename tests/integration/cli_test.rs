//! Integration tests for the mouse-mover binary

use predicates::prelude::*;

use crate::helpers::Sandbox;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_exits_0_and_lists_flags() {
    Sandbox::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--cycles"))
        .stdout(predicate::str::contains("--patterns"));
}

#[test]
fn version_shows_package_version() {
    Sandbox::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Running
// ============================================================================

#[test]
fn dry_run_completes_and_prints_summary() {
    let output = Sandbox::new()
        .command()
        .args(["--dry-run", "--cycles", "3", "--interval-ms", "10"])
        .output()
        .expect("Failed to execute mouse-mover");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Mouse Mover is running. Press CTRL + C to exit."));
    assert!(stdout.contains("Program started at: "));
    assert_eq!(stdout.matches("Summary:").count(), 1);
    assert!(stdout.contains("Mouse Cycles: 3"));
    assert!(stdout.contains("| 100% | 3/3 Cycles"));
    assert!(stdout.contains("End Time: "));
    assert!(stdout.contains(" MB"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn dry_run_reads_config_file() {
    let sandbox = Sandbox::new();
    let config = sandbox.write_config(
        r#"
        [run]
        total_cycles = 2
        interval_ms = 5
        patterns = ["circle"]

        [cursor]
        backend = "dry-run"
        "#,
    );

    sandbox
        .command()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mouse Cycles: 2"))
        .stdout(predicate::str::contains("2/2 Cycles"));
}

#[test]
fn flags_override_config_file() {
    let sandbox = Sandbox::new();
    let config = sandbox.write_config("[run]\ntotal_cycles = 50\ninterval_ms = 5\n");

    sandbox
        .command()
        .arg("--config")
        .arg(&config)
        .args(["--dry-run", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 Cycles"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    Sandbox::new()
        .command()
        .args(["--dry-run", "-n", "1", "-i", "1", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("selected cursor tool"))
        .stdout(predicate::str::contains("selected cursor tool").not());
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn invalid_config_value_exits_1() {
    let sandbox = Sandbox::new();
    let config = sandbox.write_config("[run]\nmin_delay_ms = 9\nmax_delay_ms = 2\n");

    sandbox
        .command()
        .arg("--config")
        .arg(&config)
        .arg("--dry-run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn missing_config_file_exits_1() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .args(["--dry-run", "--config"])
        .arg(sandbox.dir.path().join("missing.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn zero_cycles_flag_exits_1() {
    Sandbox::new()
        .command()
        .args(["--dry-run", "--cycles", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("total_cycles"));
}

#[test]
fn unknown_pattern_is_usage_error() {
    Sandbox::new()
        .command()
        .args(["--dry-run", "--patterns", "spiral"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("spiral"));
}

#[test]
fn unknown_backend_is_usage_error() {
    Sandbox::new()
        .command()
        .args(["--backend", "robot"])
        .assert()
        .code(2);
}
