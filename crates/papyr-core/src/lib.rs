#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Papyr Core
//!
//! Foundational types used across all Papyr crates.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Async file utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
