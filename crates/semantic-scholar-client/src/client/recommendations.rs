//! Recommendations API endpoints.

use super::query::{Endpoint, path_id};
use super::{ErrorBody, SemanticScholarClient};
use crate::error::ClientResult;
use crate::models::{Paper, RecommendationPool, RecommendationRequest, RecommendationResponse};

impl SemanticScholarClient {
    /// Get recommendations from positive and negative example papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = Endpoint::new(&self.recommendations_api_url, &["papers"])?
            .param("limit", limit)
            .fields(fields)
            .build();

        let result: RecommendationResponse =
            self.post("get_recommendations", url, request, ErrorBody::Discard).await?;
        Ok(result.recommended_papers)
    }

    /// Get recommendations for a single paper.
    ///
    /// `pool` selects the candidate set; the API defaults to recent papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recommendations_for_paper(
        &self,
        paper_id: &str,
        pool: Option<RecommendationPool>,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = Endpoint::new(
            &self.recommendations_api_url,
            &["papers", "forpaper", path_id(paper_id)?],
        )?
        .param("limit", limit)
        .optional("from", pool.map(RecommendationPool::as_str))
        .fields(fields)
        .build();

        let result: RecommendationResponse = self.get("get_recommendations_for_paper", url).await?;
        Ok(result.recommended_papers)
    }
}
