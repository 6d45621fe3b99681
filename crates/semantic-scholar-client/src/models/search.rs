//! Paged result envelopes shared by the search endpoints.

use serde::{Deserialize, Serialize};

use super::{Author, Paper, null_as_default};

/// Search result wrapper.
///
/// Relevance search and author listings page with `offset`/`next`; bulk
/// search pages with a continuation `token`. `data` keeps server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    /// Total number of matching records (estimated for bulk search).
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: u32,

    /// Offset of the next page, if more results are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<u32>,

    /// Continuation token for the next bulk search page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Records in this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<T>,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self { total: 0, offset: 0, next: None, token: None, data: Vec::new() }
    }
}

impl<T> SearchResult<T> {
    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some() || self.token.is_some()
    }

    /// Get the next offset for pagination.
    #[must_use]
    pub const fn next_offset(&self) -> Option<u32> {
        self.next
    }

    /// Number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Author search page.
pub type AuthorSearchResult = SearchResult<Author>;

/// Paper search page (relevance, bulk, match and author-papers endpoints).
pub type PaperSearchResult = SearchResult<Paper>;
