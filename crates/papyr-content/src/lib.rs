#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`markdown`]: Frontmatter extraction and markdown-to-HTML rendering
//!   - [`markdown::frontmatter`]: YAML frontmatter extraction
//!   - [`markdown::render`]: GFM rendering with code-block placeholders
//! - [`reading_time`]: Reading-time estimation
//!
//! # Design Philosophy
//!
//! **Generic utilities, domain-specific types.** Frontmatter extraction
//! returns a raw `serde_yaml::Value`; the domain layer deserializes it into
//! its own struct and decides which fields are required. Rendering returns a
//! plain HTML string whose code blocks are placeholders for a
//! presentation-layer highlighter.

pub mod markdown;
pub mod reading_time;

// Re-export commonly used items
pub use markdown::{extract_frontmatter, render_html, FrontmatterBlock, DEFAULT_LANGUAGE};
pub use reading_time::{estimate_minutes, estimate_minutes_at, WORDS_PER_MINUTE};
