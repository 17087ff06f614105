//! Note data model.
//!
//! All three types are derived, read-only records reconstructed from the
//! content directory on every call; nothing here is cached or persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Frontmatter fields a note file must carry to appear in listings.
pub const REQUIRED_FIELDS: [&str; 3] = ["order", "slug", "title"];

/// Metadata block at the top of each note file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteFrontmatter {
    /// Listing position, ascending. Unique across notes.
    pub order: i64,
    /// URL-safe unique identifier; primary key for lookup.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Categorization tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication date, ISO-8601 (`YYYY-MM-DD`). Display and sitemap
    /// freshness only; ordering comes from `order`.
    #[serde(default)]
    pub date: Option<String>,
    /// Short summary for listings and page descriptions.
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl NoteFrontmatter {
    /// Publication date parsed as a calendar date, if present and valid.
    pub fn published_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// A full note, built on demand for a single-slug lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// Parsed frontmatter.
    pub frontmatter: NoteFrontmatter,
    /// Raw markdown body, frontmatter stripped.
    pub raw_body: String,
    /// Rendered HTML with code-block placeholders.
    pub html: String,
}

/// Lightweight note record for listing pages; skips HTML rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteSummary {
    /// Parsed frontmatter.
    pub frontmatter: NoteFrontmatter,
    /// Estimated reading time of the body.
    pub reading_time_minutes: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_published_date_valid() {
        let fm = NoteFrontmatter {
            order: 1,
            slug: "welcome".into(),
            title: "Welcome".into(),
            tags: vec![],
            date: Some("2025-03-14".into()),
            excerpt: None,
        };
        assert_eq!(
            fm.published_date(),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = NoteSummary {
            frontmatter: NoteFrontmatter {
                order: 2,
                slug: "welcome".into(),
                title: "Welcome".into(),
                tags: vec!["intro".into()],
                date: None,
                excerpt: None,
            },
            reading_time_minutes: 3,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["reading_time_minutes"], 3);
        assert_eq!(json["frontmatter"]["slug"], "welcome");
        assert_eq!(json["frontmatter"]["tags"][0], "intro");
    }

    #[test]
    fn test_published_date_missing_or_invalid() {
        let mut fm = NoteFrontmatter {
            order: 1,
            slug: "welcome".into(),
            title: "Welcome".into(),
            tags: vec![],
            date: None,
            excerpt: None,
        };
        assert_eq!(fm.published_date(), None);

        fm.date = Some("March 14, 2025".into());
        assert_eq!(fm.published_date(), None);
    }
}
