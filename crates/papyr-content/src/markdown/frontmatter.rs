//! YAML frontmatter extraction from markdown files.
//!
//! Frontmatter is metadata at the start of a content file, delimited by `---`:
//!
//! ```markdown
//! ---
//! order: 3
//! slug: reading-time
//! title: How Reading Time Works
//! tags:
//!   - meta
//! ---
//!
//! Body of the note starts here.
//! ```
//!
//! Extraction is deliberately non-failing: absent delimiters, an unterminated
//! block, and invalid YAML all produce a [`FrontmatterBlock`] that records
//! what was found. The domain layer decides which of those states count as
//! malformed for its purposes.

use papyr_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Outcome of scanning a document for a leading frontmatter block.
///
/// Holds the parsed YAML mapping (if present and valid) and the body content
/// that follows the block.
#[derive(Debug, Clone)]
pub struct FrontmatterBlock<'a> {
    /// Parsed YAML frontmatter, if present and valid.
    value: Option<Value>,
    /// Document content after the closing delimiter.
    body: &'a str,
    /// Whether both delimiters were found, even if the YAML did not parse.
    had_delimiters: bool,
}

impl<'a> FrontmatterBlock<'a> {
    fn found(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
        }
    }

    fn absent(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
        }
    }

    fn invalid(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
        }
    }

    /// Check if valid frontmatter was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Check if frontmatter delimiters were present, even if parsing failed.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after the frontmatter).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Check whether the frontmatter mapping contains the given key.
    pub fn has_field(&self, key: &str) -> bool {
        self.value
            .as_ref()
            .and_then(|v| v.get(key))
            .is_some_and(|v| !v.is_null())
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }

    /// Deserialize the frontmatter into a domain-specific type.
    ///
    /// Returns `None` if no frontmatter was found, and a
    /// [`Error::MalformedFrontmatter`] if deserialization fails.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone())
                    .map_err(|e| Error::malformed(e.to_string()))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

/// Extract a leading `---`-delimited YAML frontmatter block.
///
/// # Behavior
///
/// - No delimiters: the whole document is the body, `has_frontmatter()` is
///   false.
/// - Opening delimiter without a closing one: logged at warn level, the whole
///   document is treated as body.
/// - Delimiters present but the YAML does not parse as a mapping: logged at
///   warn level, `had_delimiters()` is true while `has_frontmatter()` is
///   false, so callers can tell a broken block from a missing one.
///
/// # Example
///
/// ```rust
/// use papyr_content::markdown::extract_frontmatter;
///
/// let content = "---\nslug: welcome\ntitle: Welcome\n---\n\n# Hello";
/// let block = extract_frontmatter(content);
/// assert!(block.has_frontmatter());
/// assert_eq!(block.get_str("slug"), Some("welcome"));
/// assert_eq!(block.body().trim(), "# Hello");
/// ```
pub fn extract_frontmatter(content: &str) -> FrontmatterBlock<'_> {
    let Some(after_open) = content.strip_prefix("---") else {
        return FrontmatterBlock::absent(content);
    };

    // The opening delimiter must be a full line
    let Some(newline) = after_open.find('\n') else {
        return FrontmatterBlock::absent(content);
    };
    let rest = &after_open[newline + 1..];

    // Empty block (`---` immediately followed by `---`) or a closing
    // delimiter on its own line further down
    let (yaml_text, after_close) = if let Some(tail) = rest.strip_prefix("---") {
        ("", tail)
    } else if let Some(close) = rest.find("\n---") {
        (&rest[..close], &rest[close + 4..])
    } else {
        log::warn!("Frontmatter opening delimiter found but no closing delimiter");
        return FrontmatterBlock::absent(content);
    };

    let body = after_close.strip_prefix('\n').unwrap_or(after_close);

    match serde_yaml::from_str::<Value>(yaml_text) {
        Ok(value) if value.is_mapping() || value.is_null() => {
            FrontmatterBlock::found(value, body)
        }
        Ok(_) => {
            log::warn!("Frontmatter block is not a YAML mapping");
            FrontmatterBlock::invalid(body)
        }
        Err(e) => {
            log::warn!("Failed to parse frontmatter YAML: {e}");
            FrontmatterBlock::invalid(body)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    // ------------------------------------------------------------------------
    // Basic extraction
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_valid_frontmatter() {
        let content = "---\nslug: welcome\ntitle: Welcome Note\n---\n\n# Content";
        let block = extract_frontmatter(content);

        assert!(block.has_frontmatter());
        assert!(block.had_delimiters());
        assert_eq!(block.get_str("slug"), Some("welcome"));
        assert_eq!(block.get_str("title"), Some("Welcome Note"));
        assert_eq!(block.body().trim(), "# Content");
    }

    #[test]
    fn test_extract_no_frontmatter() {
        let content = "# Just Markdown\n\nNo frontmatter here.";
        let block = extract_frontmatter(content);

        assert!(!block.has_frontmatter());
        assert!(!block.had_delimiters());
        assert_eq!(block.body(), content);
    }

    #[test]
    fn test_extract_empty_frontmatter() {
        let content = "---\n---\n\nBody content";
        let block = extract_frontmatter(content);

        // Empty YAML parses as null
        assert!(block.had_delimiters());
        assert_eq!(block.body().trim(), "Body content");
    }

    #[test]
    fn test_extract_no_closing_delimiter() {
        let content = "---\ntitle: Incomplete\n\nNo closing delimiter";
        let block = extract_frontmatter(content);

        assert!(!block.has_frontmatter());
        assert!(!block.had_delimiters());
        assert_eq!(block.body(), content);
    }

    #[test]
    fn test_extract_invalid_yaml() {
        let content = "---\n{{invalid: yaml: here}}\n---\n\nBody";
        let block = extract_frontmatter(content);

        assert!(!block.has_frontmatter());
        assert!(block.had_delimiters());
        assert_eq!(block.body().trim(), "Body");
    }

    #[test]
    fn test_extract_non_mapping_yaml() {
        let content = "---\n- just\n- a\n- list\n---\n\nBody";
        let block = extract_frontmatter(content);

        assert!(!block.has_frontmatter());
        assert!(block.had_delimiters());
    }

    // ------------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------------

    #[test]
    fn test_has_field() {
        let content = "---\norder: 1\nslug: welcome\ndate: null\n---\n\nBody";
        let block = extract_frontmatter(content);

        assert!(block.has_field("order"));
        assert!(block.has_field("slug"));
        assert!(!block.has_field("title"));
        // Explicit null does not count as present
        assert!(!block.has_field("date"));
    }

    #[test]
    fn test_frontmatter_with_lists() {
        let content = "---\ntitle: Test\ntags:\n  - rust\n  - markdown\n---\n\nBody";
        let block = extract_frontmatter(content);

        assert!(block.has_frontmatter());
        let tags = block.value().unwrap().get("tags").unwrap();
        assert_eq!(tags.as_sequence().unwrap().len(), 2);
    }

    // ------------------------------------------------------------------------
    // Deserialization
    // ------------------------------------------------------------------------

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestMeta {
        order: i64,
        slug: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn test_deserialize_frontmatter() {
        let content = "---\norder: 2\nslug: welcome\ntags:\n  - a\n  - b\n---\n\nBody";
        let block = extract_frontmatter(content);
        let meta: Option<TestMeta> = block.deserialize().unwrap();

        let meta = meta.unwrap();
        assert_eq!(meta.order, 2);
        assert_eq!(meta.slug, "welcome");
        assert_eq!(meta.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_deserialize_no_frontmatter() {
        let content = "# No frontmatter";
        let block = extract_frontmatter(content);
        let meta: Option<TestMeta> = block.deserialize().unwrap();

        assert!(meta.is_none());
    }

    #[test]
    fn test_deserialize_missing_required_field_errors() {
        let content = "---\nslug: welcome\n---\n\nBody";
        let block = extract_frontmatter(content);
        let result: papyr_core::Result<Option<TestMeta>> = block.deserialize();

        assert!(result.is_err());
    }

    // ------------------------------------------------------------------------
    // Edge cases
    // ------------------------------------------------------------------------

    #[test]
    fn test_dashes_in_body() {
        let content = "---\ntitle: Test\n---\n\nContent with --- dashes in it";
        let block = extract_frontmatter(content);

        assert!(block.has_frontmatter());
        assert!(block.body().contains("--- dashes"));
    }

    #[test]
    fn test_unicode_frontmatter() {
        let content = "---\ntitle: 音楽理論\n---\n\n本文";
        let block = extract_frontmatter(content);

        assert!(block.has_frontmatter());
        assert_eq!(block.get_str("title"), Some("音楽理論"));
        assert_eq!(block.body().trim(), "本文");
    }

    #[test]
    fn test_empty_content() {
        let block = extract_frontmatter("");
        assert!(!block.has_frontmatter());
        assert_eq!(block.body(), "");
    }

    #[test]
    fn test_only_opening_delimiter() {
        let block = extract_frontmatter("---");
        assert!(!block.has_frontmatter());
        assert_eq!(block.body(), "---");
    }
}
