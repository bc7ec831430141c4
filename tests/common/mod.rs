//! Shared test utilities for config-driven cheatsheet tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use scope_cheatsheet::config::PROJECT_CONFIG_PATH;

/// Creates a temporary project with the given lists file content
pub fn create_test_project(lists_toml: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(PROJECT_CONFIG_PATH);
    fs::create_dir_all(path.parent().expect("config path has a parent"))
        .expect("Failed to create config dir");
    fs::write(&path, lists_toml).expect("Failed to write lists file");
    temp_dir
}

/// Writes a standalone lists file inside `dir` and returns its path
pub fn write_lists_file(dir: &TempDir, name: &str, lists_toml: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lists_toml).expect("Failed to write lists file");
    path
}
