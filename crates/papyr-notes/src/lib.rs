#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`types`]: Note data model
//! - [`config`]: Pipeline configuration
//! - [`store`]: Content-directory file store
//! - [`check`]: Content validation pass
//! - [`sitemap`]: Sitemap entries for the site generator
//! - [`meta`]: Per-page metadata records

pub mod check;
pub mod config;
pub mod meta;
pub mod sitemap;
pub mod store;
pub mod types;

use std::path::Path;

use papyr_content::markdown::extract_frontmatter;
use papyr_content::{reading_time, render_html};
use papyr_core::{Error, Result};

pub use check::{ContentIssue, IssueKind};
pub use config::NotesConfig;
pub use store::NoteStore;
pub use types::{Note, NoteFrontmatter, NoteSummary, REQUIRED_FIELDS};

/// The notes aggregation API.
///
/// Each operation re-reads the content directory from scratch; there is no
/// cache to invalidate and concurrent calls are safe. File-level failures
/// (unreadable file, malformed frontmatter, missing required field) are
/// logged and skipped; they never abort a listing.
#[derive(Debug, Clone)]
pub struct Notes {
    store: NoteStore,
    config: NotesConfig,
}

impl Notes {
    /// Create a pipeline over a content directory with default settings.
    pub fn new(content_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::with_config(NotesConfig::default().with_content_dir(content_dir))
    }

    /// Create a pipeline from configuration.
    pub fn with_config(config: NotesConfig) -> Self {
        Self {
            store: NoteStore::from_config(&config),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// The underlying file store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// All notes as listing summaries, sorted ascending by `order`.
    ///
    /// Files that fail to read or parse are skipped with a warning, each
    /// reported independently. Ties on `order` keep filename order (the sort
    /// is stable over the store's sorted listing), so the result is
    /// deterministic for any directory enumeration order.
    pub async fn all_notes(&self) -> Vec<NoteSummary> {
        let mut summaries = Vec::new();

        for path in self.store.list_files().await {
            match self.parse_note_file(&path).await {
                Ok((frontmatter, body)) => summaries.push(NoteSummary {
                    reading_time_minutes: reading_time::estimate_minutes_at(
                        &body,
                        self.config.words_per_minute,
                    ),
                    frontmatter,
                }),
                Err(e) => log::warn!("Skipping note file {}: {e}", path.display()),
            }
        }

        summaries.sort_by_key(|s| s.frontmatter.order);
        summaries
    }

    /// Look up a single note by slug, rendering its HTML.
    ///
    /// Scans frontmatter until a slug matches and only then renders the
    /// body. Returns `None` when no file's frontmatter matches — a normal
    /// outcome for the routing layer, not an error. Broken files along the
    /// way are skipped exactly as in [`Notes::all_notes`].
    pub async fn note_by_slug(&self, slug: &str) -> Option<Note> {
        for path in self.store.list_files().await {
            let (frontmatter, body) = match self.parse_note_file(&path).await {
                Ok(parsed) => parsed,
                Err(e) => {
                    log::warn!("Skipping note file {}: {e}", path.display());
                    continue;
                }
            };

            if frontmatter.slug == slug {
                let html = render_html(&body);
                return Some(Note {
                    frontmatter,
                    raw_body: body,
                    html,
                });
            }
        }

        None
    }

    /// All known slugs, for pre-generating static routes.
    ///
    /// Best-effort: files whose frontmatter lacks a slug are excluded with a
    /// warning, as are duplicates (first occurrence in filename order wins).
    /// Never fails; a missing directory yields an empty list.
    pub async fn all_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = Vec::new();

        for path in self.store.list_files().await {
            let raw = match self.store.read(&path).await {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("Error reading {}: {e}", path.display());
                    continue;
                }
            };

            let block = extract_frontmatter(&raw);
            if !block.has_frontmatter() {
                log::warn!("Malformed frontmatter in {}", path.display());
                continue;
            }

            match block.get_str("slug") {
                Some(slug) if !slug.is_empty() => {
                    if slugs.iter().any(|s| s == slug) {
                        log::warn!(
                            "Duplicate slug '{slug}' in {}; keeping first occurrence",
                            path.display()
                        );
                    } else {
                        slugs.push(slug.to_string());
                    }
                }
                _ => {
                    log::warn!("Missing slug in frontmatter for {}", path.display());
                }
            }
        }

        slugs
    }

    /// Read and fully parse one note file.
    ///
    /// Distinguishes the failure modes the skip-warnings report: unreadable
    /// file, absent/unparsable frontmatter, missing required field.
    pub(crate) async fn parse_note_file(&self, path: &Path) -> Result<(NoteFrontmatter, String)> {
        let raw = self.store.read(path).await?;

        let block = extract_frontmatter(&raw);
        if !block.has_frontmatter() {
            return Err(if block.had_delimiters() {
                Error::malformed("frontmatter block does not parse as a mapping")
            } else {
                Error::malformed("no frontmatter block")
            });
        }

        for field in REQUIRED_FIELDS {
            if !block.has_field(field) {
                return Err(Error::MissingField(field));
            }
        }

        let frontmatter: NoteFrontmatter = block
            .deserialize()?
            .ok_or_else(|| Error::malformed("empty frontmatter"))?;

        Ok((frontmatter, block.body().to_string()))
    }
}
