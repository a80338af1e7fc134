//! Shared test utilities for integration tests.

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary content directory holding the given posts.
///
/// # Arguments
///
/// * `posts`: Pairs of file name and markdown source
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_content_dir(posts: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, source) in posts {
        write_file(dir.path(), name, source)?;
    }
    Ok(dir)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
