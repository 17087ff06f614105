//! Utility modules for file operations.
//!
//! # Modules
//!
//! - [`files`]: Async file listing and reading utilities

pub mod files;
