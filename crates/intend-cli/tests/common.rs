//! Shared fixture for CLI integration tests.
//!
//! Each integration test binary uses a different subset, hence
//! `allow(dead_code)`.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    inbox: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".intend");
        let inbox = temp_dir.path().join("inbox");

        fs::create_dir_all(&inbox).expect("Failed to create inbox dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            inbox,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn inbox(&self) -> &Path {
        &self.inbox
    }

    /// `intend` pointed at this fixture's data directory, plain output
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("intend");
        cmd.env_remove("INTEND_PATH")
            .env("NO_COLOR", "1")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");
        cmd
    }

    pub fn json_command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("intend");
        cmd.env_remove("INTEND_PATH")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("json");
        cmd
    }

    pub fn write_transcript(&self, name: &str, text: &str) -> PathBuf {
        let path = self.inbox.join(name);
        fs::write(&path, text).expect("Failed to write transcript");
        path
    }

    pub fn add_patient(&self, name: &str) {
        self.command()
            .args(["patient", "add", name])
            .assert()
            .success();
    }

    /// Runs a command with `--format json` and parses stdout
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .json_command()
            .args(args)
            .output()
            .expect("Failed to run intend");
        assert!(
            output.status.success(),
            "intend {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
