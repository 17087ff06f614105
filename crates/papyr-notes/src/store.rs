//! Content-directory file store.
//!
//! One configured directory, scanned non-recursively for note files. The
//! store never fails a listing: a missing directory degrades to an empty
//! list with a warning, so a site build with zero notes still succeeds.

use std::path::{Path, PathBuf};

use papyr_core::util::files;
use papyr_core::Result;

use crate::config::NotesConfig;

/// Read-only accessor for the notes content directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
    extension: String,
    exclude: Vec<String>,
}

impl NoteStore {
    /// Create a store over the given directory with default settings
    /// (`.md` files, `README.md` excluded).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let defaults = NotesConfig::default();
        Self {
            dir: dir.into(),
            extension: defaults.extension,
            exclude: defaults.exclude,
        }
    }

    /// Create a store from pipeline configuration.
    pub fn from_config(config: &NotesConfig) -> Self {
        Self {
            dir: config.content_dir.clone(),
            extension: config.extension.clone(),
            exclude: config.exclude.clone(),
        }
    }

    /// The content directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List note files, sorted by filename.
    ///
    /// Non-note files (wrong extension, excluded names) are filtered out.
    /// Never fails: a missing or unreadable directory logs a warning and
    /// yields an empty list.
    pub async fn list_files(&self) -> Vec<PathBuf> {
        if !files::exists(&self.dir).await {
            log::warn!("Notes directory does not exist: {}", self.dir.display());
            return Vec::new();
        }

        match files::list_files_with_extension(&self.dir, &self.extension).await {
            Ok(paths) => paths
                .into_iter()
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_none_or(|name| !self.exclude.iter().any(|ex| ex == name))
                })
                .collect(),
            Err(e) => {
                log::warn!("Error reading notes directory: {e}");
                Vec::new()
            }
        }
    }

    /// Read one note file's raw text.
    pub async fn read(&self, path: &Path) -> Result<String> {
        files::read_file(path).await
    }
}
