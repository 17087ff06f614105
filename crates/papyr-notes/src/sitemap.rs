//! Sitemap entries for the site generator.
//!
//! Produces one record for the notes index plus one per note. The generator
//! owns the serialization format; this module only supplies the data.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::NotesConfig;
use crate::types::NoteSummary;

/// Suggested re-crawl frequency for a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Content changes on most visits.
    Daily,
    /// Content changes every few days.
    Weekly,
    /// Content rarely changes.
    Monthly,
    /// Content is effectively frozen.
    Yearly,
}

impl ChangeFrequency {
    /// The lowercase token used in sitemap XML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// One sitemap record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute URL of the page.
    pub loc: String,
    /// Last modification date, from the note's frontmatter date.
    pub lastmod: Option<NaiveDate>,
    /// Suggested re-crawl frequency.
    pub changefreq: ChangeFrequency,
    /// Relative priority, 0.0 to 1.0.
    pub priority: f32,
}

/// Build sitemap entries for the notes section.
///
/// The first entry is the notes index (`{base}/notes`, freshness from the
/// newest note), followed by one entry per note in the given listing order.
/// Notes without a valid date get no `lastmod`.
pub fn note_entries(config: &NotesConfig, notes: &[NoteSummary]) -> Vec<SitemapEntry> {
    let base = config.base_url_trimmed();

    let newest = notes
        .iter()
        .filter_map(|n| n.frontmatter.published_date())
        .max();

    let mut entries = Vec::with_capacity(notes.len() + 1);
    entries.push(SitemapEntry {
        loc: format!("{base}/notes"),
        lastmod: newest,
        changefreq: ChangeFrequency::Weekly,
        priority: 0.8,
    });

    for note in notes {
        entries.push(SitemapEntry {
            loc: format!("{base}/notes/{}", note.frontmatter.slug),
            lastmod: note.frontmatter.published_date(),
            changefreq: ChangeFrequency::Monthly,
            priority: 0.6,
        });
    }

    entries
}
