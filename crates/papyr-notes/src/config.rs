//! Notes pipeline configuration.
//!
//! Plain serde struct with per-field defaults, loadable from TOML. Every
//! field has a default so an empty config file (or none at all) yields a
//! working pipeline rooted at `content/notes`.

use std::path::PathBuf;

use papyr_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the notes pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Directory containing note files. Scanned non-recursively.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// File extension (without dot) of note files.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Filenames in the content directory that are not notes.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Base URL for sitemap entries.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site title, appended to per-page titles.
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Keywords appended to every note page's keyword list.
    #[serde(default)]
    pub site_keywords: Vec<String>,

    /// Reading rate for time estimates.
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content/notes")
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_exclude() -> Vec<String> {
    vec!["README.md".to_string()]
}

fn default_base_url() -> String {
    "https://example.com".to_string()
}

fn default_site_title() -> String {
    "Notes".to_string()
}

fn default_words_per_minute() -> u32 {
    papyr_content::WORDS_PER_MINUTE
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            extension: default_extension(),
            exclude: default_exclude(),
            base_url: default_base_url(),
            site_title: default_site_title(),
            site_keywords: Vec::new(),
            words_per_minute: default_words_per_minute(),
        }
    }
}

impl NotesConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Replace the content directory, keeping everything else.
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Base URL without a trailing slash, for joining paths.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NotesConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("content/notes"));
        assert_eq!(config.extension, "md");
        assert_eq!(config.exclude, vec!["README.md"]);
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = NotesConfig::from_toml_str("").unwrap();
        assert_eq!(config.extension, "md");
        assert_eq!(config.site_title, "Notes");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = NotesConfig::from_toml_str(
            "content_dir = \"data/notes\"\nbase_url = \"https://notes.dev/\"\n",
        )
        .unwrap();
        assert_eq!(config.content_dir, PathBuf::from("data/notes"));
        assert_eq!(config.base_url_trimmed(), "https://notes.dev");
        // Untouched fields keep their defaults
        assert_eq!(config.exclude, vec!["README.md"]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = NotesConfig::from_toml_str("content_dir = [broken");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_content_dir() {
        let config = NotesConfig::default().with_content_dir("/tmp/notes");
        assert_eq!(config.content_dir, PathBuf::from("/tmp/notes"));
    }
}
