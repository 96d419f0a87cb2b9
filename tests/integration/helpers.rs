//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment: empty config dir, no colors.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// `mouse-mover` command that cannot see the user's config.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("mouse-mover").expect("Failed to find binary");
        cmd.env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a config file into the sandbox and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("test-config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}
