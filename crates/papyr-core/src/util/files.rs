//! Async file utilities for the Papyr content pipeline.
//!
//! Thin wrappers over `tokio::fs` used by the content store: non-recursive
//! listing of files by extension, whole-file reads, and existence checks.
//! Errors carry the offending path so callers can log useful warnings.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// List files with the given extension in a directory, non-recursive.
///
/// Subdirectories are not descended into. The result is sorted by path so
/// downstream ordering is deterministic regardless of how the OS enumerates
/// directory entries.
///
/// Returns an error if the directory itself cannot be read; callers that
/// want missing-directory-as-empty semantics handle that themselves.
pub async fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, dir))?;
        if file_type.is_dir() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_files_with_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.md"), "# One").await.unwrap();
        fs::write(temp.path().join("two.md"), "# Two").await.unwrap();
        fs::write(temp.path().join("skip.txt"), "skip").await.unwrap();

        let files = list_files_with_extension(temp.path(), "md").await.unwrap();

        assert_eq!(files.len(), 2);
    }

    #[tokio::test]
    async fn test_list_files_is_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zebra.md"), "z").await.unwrap();
        fs::write(temp.path().join("apple.md"), "a").await.unwrap();
        fs::write(temp.path().join("mango.md"), "m").await.unwrap();

        let files = list_files_with_extension(temp.path(), "md").await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["apple.md", "mango.md", "zebra.md"]);
    }

    #[tokio::test]
    async fn test_list_files_skips_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.md"), "top").await.unwrap();
        let subdir = temp.path().join("nested");
        fs::create_dir(&subdir).await.unwrap();
        fs::write(subdir.join("deep.md"), "deep").await.unwrap();

        let files = list_files_with_extension(temp.path(), "md").await.unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.md"));
    }

    #[tokio::test]
    async fn test_list_files_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let result = list_files_with_extension(&missing, "md").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nope"));
    }

    #[tokio::test]
    async fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.md");
        fs::write(&file_path, "# Test Content").await.unwrap();

        let content = read_file(&file_path).await.unwrap();

        assert_eq!(content, "# Test Content");
    }

    #[tokio::test]
    async fn test_read_file_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nonexistent.md");

        let result = read_file(&missing).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nonexistent.md"));
    }

    #[tokio::test]
    async fn test_exists() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("exists.md");
        fs::write(&file_path, "content").await.unwrap();

        assert!(exists(&file_path).await);
        assert!(!exists(&temp.path().join("nonexistent.md")).await);
    }
}
