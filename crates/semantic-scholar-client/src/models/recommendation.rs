//! Recommendation request/response models.

use serde::{Deserialize, Serialize};

use super::{Paper, null_as_default};

/// Positive and negative example papers for a recommendation lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Paper IDs the recommendations should resemble.
    pub positive: Vec<String>,

    /// Paper IDs the recommendations should steer away from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub negative: Vec<String>,
}

impl RecommendationRequest {
    /// Create a request from positive examples only.
    #[must_use]
    pub fn new(positive: Vec<String>) -> Self {
        Self { positive, negative: Vec::new() }
    }

    /// Add negative examples.
    #[must_use]
    pub fn with_negative(mut self, negative: Vec<String>) -> Self {
        self.negative = negative;
        self
    }
}

/// Recommended papers, in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Recommended papers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_papers: Vec<Paper>,
}
