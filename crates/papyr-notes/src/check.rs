//! Content validation pass.
//!
//! The read APIs deliberately skip broken files so a site build never fails
//! on partial content. `check` is the strict counterpart for build-time
//! validation: it reports every problem the permissive APIs would silently
//! skip, including duplicate slugs, without changing their behavior.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use papyr_core::Error;
use serde::Serialize;

use crate::Notes;

/// Category of a content problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// File could not be read.
    UnreadableFile,
    /// Frontmatter block absent or unparsable.
    MalformedFrontmatter,
    /// Frontmatter parsed but a required field is missing.
    MissingField,
    /// Slug already used by an earlier file.
    DuplicateSlug,
}

/// One problem found in one content file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentIssue {
    /// File the problem was found in.
    pub path: PathBuf,
    /// Problem category.
    pub kind: IssueKind,
    /// Human-readable description.
    pub detail: String,
}

impl ContentIssue {
    fn from_error(path: PathBuf, error: &Error) -> Self {
        let kind = match error {
            Error::MalformedFrontmatter(_) => IssueKind::MalformedFrontmatter,
            Error::MissingField(_) => IssueKind::MissingField,
            _ => IssueKind::UnreadableFile,
        };
        Self {
            path,
            kind,
            detail: error.to_string(),
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.detail)
    }
}

impl Notes {
    /// Validate every file in the content directory.
    ///
    /// Returns one [`ContentIssue`] per problem; an empty result means the
    /// permissive read APIs will not skip anything. Duplicate slugs are
    /// reported against the later file in filename order, matching the
    /// first-match-wins lookup policy.
    pub async fn check(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in self.store().list_files().await {
            match self.parse_note_file(&path).await {
                Ok((frontmatter, _body)) => {
                    if let Some(first) = seen.get(&frontmatter.slug) {
                        issues.push(ContentIssue {
                            path: path.clone(),
                            kind: IssueKind::DuplicateSlug,
                            detail: format!(
                                "slug '{}' already used by {}",
                                frontmatter.slug,
                                first.display()
                            ),
                        });
                    } else {
                        seen.insert(frontmatter.slug.clone(), path.clone());
                    }
                }
                Err(e) => issues.push(ContentIssue::from_error(path.clone(), &e)),
            }
        }

        issues
    }
}
