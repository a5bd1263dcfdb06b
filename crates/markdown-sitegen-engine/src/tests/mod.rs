//! Test helpers shared by unit tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary site directory
pub fn create_test_site_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with content, creating parent directories as needed
pub fn create_test_file(site_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = site_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
