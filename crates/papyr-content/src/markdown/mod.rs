//! Markdown parsing and frontmatter extraction utilities.
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`render`]: GFM-to-HTML rendering with code-block placeholders

pub mod frontmatter;
pub mod render;

// Re-export key types and functions
pub use frontmatter::{extract_frontmatter, FrontmatterBlock};
pub use render::{render_html, DEFAULT_LANGUAGE};
