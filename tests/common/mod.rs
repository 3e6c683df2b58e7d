//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a qloss command isolated from any user/project config
pub fn qloss() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("qloss"));
    cmd.env_remove("QLOSS_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Helper to run qloss inside `tmp`, with user config dirs pointed there too
pub fn qloss_in(tmp: &TempDir) -> Command {
    let mut cmd = qloss();
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join(".config"));
    cmd
}

/// Helper to write a CSV data file into a temp directory
pub fn write_data(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Samples with mean 15 and population standard deviation 2
pub fn centered_samples() -> Vec<f64> {
    vec![13.0, 17.0, 13.0, 17.0]
}

/// Samples with mean 5 and population standard deviation 1
pub fn one_sided_samples() -> Vec<f64> {
    vec![4.0, 6.0]
}
