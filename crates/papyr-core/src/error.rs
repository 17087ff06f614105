//! Error types for Papyr operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Papyr crates. Uses `thiserror` for derive macros.
//!
//! Content-level problems (malformed frontmatter, missing fields) get their own
//! variants so callers can decide per-file whether to skip or surface them.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in Papyr operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error with the path that caused it.
    #[error("I/O error on {path}: {source}")]
    IoPath {
        /// Path of the file or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Frontmatter block is absent or does not parse as a mapping.
    #[error("Malformed frontmatter: {0}")]
    MalformedFrontmatter(String),

    /// Frontmatter parsed but a required field is missing.
    #[error("Missing required frontmatter field '{0}'")]
    MissingField(&'static str),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a malformed-frontmatter error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedFrontmatter(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Wrap an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::IoPath {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` for the not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for per-file content problems that listing operations
    /// skip over: unreadable files, malformed frontmatter, missing fields.
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            Self::IoPath { .. } | Self::MalformedFrontmatter(_) | Self::MissingField(_)
        )
    }
}

/// Result type alias using Papyr's Error type.
pub type Result<T> = std::result::Result<T, Error>;
