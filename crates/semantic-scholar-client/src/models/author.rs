//! Author data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::{Paper, null_as_default};

/// A research author from Semantic Scholar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Semantic Scholar profile URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Author's institutional affiliations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: Vec<String>,

    /// Author's homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i32>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i32>,

    /// Papers by this author (only when requested via `fields=papers`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub papers: Option<Vec<Paper>>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Get the primary affiliation if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }

    /// Get the h-index or 0 if not available.
    #[must_use]
    pub fn h_index_value(&self) -> i32 {
        self.h_index.unwrap_or(0)
    }

    /// Get paper count or 0 if not available.
    #[must_use]
    pub fn papers_count(&self) -> i32 {
        self.paper_count.unwrap_or(0)
    }
}
