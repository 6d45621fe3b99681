//! Graph API author endpoints.

use serde::Serialize;

use super::query::{Endpoint, path_id};
use super::{ErrorBody, SemanticScholarClient};
use crate::error::ClientResult;
use crate::models::{Author, AuthorSearchResult, PaperSearchResult};

/// Body of the author and paper batch endpoints.
#[derive(Debug, Serialize)]
pub(super) struct BatchRequest<'a> {
    pub(super) ids: &'a [String],
}

impl SemanticScholarClient {
    /// Get an author by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author(&self, author_id: &str, fields: &[&str]) -> ClientResult<Author> {
        let url = Endpoint::new(&self.graph_api_url, &["author", path_id(author_id)?])?
            .fields(fields)
            .build();

        self.get("get_author", url).await
    }

    /// Get multiple authors by ID (batch API).
    ///
    /// The API returns `null` for unknown IDs; those slots are dropped.
    /// On a non-200 status the error carries the response body.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_authors_batch(
        &self,
        author_ids: &[String],
        fields: &[&str],
    ) -> ClientResult<Vec<Author>> {
        let url = Endpoint::new(&self.graph_api_url, &["author", "batch"])?.fields(fields).build();
        let body = BatchRequest { ids: author_ids };

        let results: Vec<Option<Author>> =
            self.post("get_authors_batch", url, &body, ErrorBody::Capture).await?;

        let requested = results.len();
        let authors: Vec<Author> = results.into_iter().flatten().collect();
        if authors.len() < requested {
            tracing::debug!(
                requested,
                found = authors.len(),
                "Batch author lookup returned null entries"
            );
        }
        Ok(authors)
    }

    /// Search for authors by name.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_authors(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorSearchResult> {
        let url = Endpoint::new(&self.graph_api_url, &["author", "search"])?
            .param("query", query)
            .param("offset", offset)
            .param("limit", limit)
            .fields(fields)
            .build();

        self.get("search_authors", url).await
    }

    /// Get a page of an author's papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author_papers(
        &self,
        author_id: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<PaperSearchResult> {
        let url = Endpoint::new(&self.graph_api_url, &["author", path_id(author_id)?, "papers"])?
            .param("offset", offset)
            .param("limit", limit)
            .fields(fields)
            .build();

        self.get("get_author_papers", url).await
    }
}
