//! Per-page metadata records.
//!
//! Data the page-rendering layer needs for a note's `<head>`: composed
//! title, description, keywords, and publish date. How these become meta
//! tags or structured data is the renderer's concern.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::NotesConfig;
use crate::types::NoteFrontmatter;

/// Head metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    /// Full page title, site title appended.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Keyword list: note tags followed by site-wide keywords.
    pub keywords: Vec<String>,
    /// Publication date, when the note carries a valid one.
    pub published: Option<NaiveDate>,
}

/// Build page metadata for a note.
pub fn note_metadata(config: &NotesConfig, frontmatter: &NoteFrontmatter) -> PageMetadata {
    let mut keywords = frontmatter.tags.clone();
    keywords.extend(config.site_keywords.iter().cloned());

    PageMetadata {
        title: format!("{} | {}", frontmatter.title, config.site_title),
        description: frontmatter.excerpt.clone().unwrap_or_default(),
        keywords,
        published: frontmatter.published_date(),
    }
}

/// Metadata for the not-found page when a slug matches nothing.
pub fn not_found_metadata(config: &NotesConfig) -> PageMetadata {
    PageMetadata {
        title: format!("Note Not Found | {}", config.site_title),
        description: String::new(),
        keywords: Vec::new(),
        published: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn frontmatter() -> NoteFrontmatter {
        NoteFrontmatter {
            order: 1,
            slug: "shipping-static-sites".to_string(),
            title: "Shipping Static Sites".to_string(),
            tags: vec!["web".to_string(), "deployment".to_string()],
            date: Some("2025-02-11".to_string()),
            excerpt: Some("Notes on shipping static sites.".to_string()),
        }
    }

    #[test]
    fn test_note_metadata() {
        let config = NotesConfig {
            site_title: "Field Notes".to_string(),
            site_keywords: vec!["engineering".to_string()],
            ..NotesConfig::default()
        };

        let meta = note_metadata(&config, &frontmatter());

        assert_eq!(meta.title, "Shipping Static Sites | Field Notes");
        assert_eq!(meta.description, "Notes on shipping static sites.");
        assert_eq!(meta.keywords, vec!["web", "deployment", "engineering"]);
        assert_eq!(meta.published, NaiveDate::from_ymd_opt(2025, 2, 11));
    }

    #[test]
    fn test_note_metadata_without_optionals() {
        let config = NotesConfig::default();
        let mut fm = frontmatter();
        fm.excerpt = None;
        fm.date = None;
        fm.tags = vec![];

        let meta = note_metadata(&config, &fm);

        assert_eq!(meta.description, "");
        assert!(meta.keywords.is_empty());
        assert_eq!(meta.published, None);
    }

    #[test]
    fn test_not_found_metadata() {
        let config = NotesConfig::default();
        let meta = not_found_metadata(&config);
        assert_eq!(meta.title, "Note Not Found | Notes");
    }
}
