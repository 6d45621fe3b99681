//! Graph API paper endpoints.

use serde::Deserialize;

use super::authors::BatchRequest;
use super::query::{Endpoint, path_id};
use super::{ErrorBody, SemanticScholarClient};
use crate::error::ClientResult;
use crate::models::{Filters, Paper, PaperSearchResult};

/// Autocomplete payload: either a bare list or the `{"matches": [...]}` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum AutocompleteResponse {
    Bare(Vec<Paper>),
    Wrapped { matches: Vec<AutocompleteMatch> },
}

/// One entry of the `matches` wrapper.
#[derive(Deserialize)]
struct AutocompleteMatch {
    id: String,
    #[serde(default)]
    title: Option<String>,
}

impl From<AutocompleteMatch> for Paper {
    fn from(m: AutocompleteMatch) -> Self {
        Self { paper_id: m.id, title: m.title, ..Self::default() }
    }
}

impl SemanticScholarClient {
    /// Get a single paper by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper> {
        let url = Endpoint::new(&self.graph_api_url, &["paper", path_id(paper_id)?])?
            .fields(fields)
            .build();

        self.get("get_paper", url).await
    }

    /// Autocomplete a partial paper title.
    ///
    /// Returns minimal papers (ID and title).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn autocomplete_papers(&self, query: &str) -> ClientResult<Vec<Paper>> {
        let url = Endpoint::new(&self.graph_api_url, &["paper", "autocomplete"])?
            .param("query", query)
            .build();

        let result: AutocompleteResponse = self.get("autocomplete_papers", url).await?;
        Ok(match result {
            AutocompleteResponse::Wrapped { matches } => {
                matches.into_iter().map(Paper::from).collect()
            }
            AutocompleteResponse::Bare(papers) => papers,
        })
    }

    /// Get multiple papers by ID (batch API).
    ///
    /// The API returns `null` for unknown IDs; those slots are dropped.
    /// On a non-200 status the error carries the response body.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_papers_batch(
        &self,
        paper_ids: &[String],
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = Endpoint::new(&self.graph_api_url, &["paper", "batch"])?.fields(fields).build();
        let body = BatchRequest { ids: paper_ids };

        let results: Vec<Option<Paper>> =
            self.post("get_papers_batch", url, &body, ErrorBody::Capture).await?;

        let requested = results.len();
        let papers: Vec<Paper> = results.into_iter().flatten().collect();
        if papers.len() < requested {
            tracing::debug!(
                requested,
                found = papers.len(),
                "Batch paper lookup returned null entries"
            );
        }
        Ok(papers)
    }

    /// Relevance-ranked paper search.
    ///
    /// `filters` entries (e.g. `year`, `venue`, `fieldsOfStudy`,
    /// `minCitationCount`) are appended to the query string as given.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
        filters: &Filters,
    ) -> ClientResult<PaperSearchResult> {
        let url = Endpoint::new(&self.graph_api_url, &["paper", "search"])?
            .param("query", query)
            .param("offset", offset)
            .param("limit", limit)
            .fields(fields)
            .filters(filters)
            .build();

        self.get("search_papers", url).await
    }

    /// Bulk search for papers with boolean query syntax.
    ///
    /// Results are not relevance ranked. Pass the `token` of the previous
    /// page to continue; `sort` takes `field:order` (e.g. `citationCount:desc`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers_bulk(
        &self,
        query: &str,
        token: Option<&str>,
        fields: &[&str],
        sort: Option<&str>,
        publication_types: Option<&str>,
        filters: &Filters,
    ) -> ClientResult<PaperSearchResult> {
        let url = Endpoint::new(&self.graph_api_url, &["paper", "search", "bulk"])?
            .optional("query", Some(query))
            .optional("token", token)
            .fields(fields)
            .optional("sort", sort)
            .optional("publicationTypes", publication_types)
            .filters(filters)
            .build();

        self.get("search_papers_bulk", url).await
    }

    /// Find the paper whose title best matches `query`.
    ///
    /// # Errors
    ///
    /// Returns error on API failure, including 404 when nothing matches.
    pub async fn search_papers_match(
        &self,
        query: &str,
        fields: &[&str],
        publication_types: Option<&str>,
        filters: &Filters,
    ) -> ClientResult<PaperSearchResult> {
        let url = Endpoint::new(&self.graph_api_url, &["paper", "search", "match"])?
            .param("query", query)
            .fields(fields)
            .optional("publicationTypes", publication_types)
            .filters(filters)
            .build();

        self.get("search_papers_match", url).await
    }
}
