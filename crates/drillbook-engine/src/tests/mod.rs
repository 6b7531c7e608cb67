use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary exercises root
pub fn create_test_exercises_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file (and its parent directories) with content
pub fn create_test_file(root: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = root.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
