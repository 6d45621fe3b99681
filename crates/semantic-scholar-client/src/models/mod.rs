//! Data models for Semantic Scholar API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename = "camelCase")]` to match API naming. Unknown fields are ignored.

mod author;
mod dataset;
mod enums;
mod paper;
mod recommendation;
mod search;

pub use author::Author;
pub use dataset::{DatasetDiff, DatasetDiffList, DatasetMetadata, DatasetSummary, Release};
pub use enums::RecommendationPool;
pub use paper::{ExternalIds, Paper, Tldr};
pub use recommendation::{RecommendationRequest, RecommendationResponse};
pub use search::{AuthorSearchResult, PaperSearchResult, SearchResult};

use serde::{Deserialize, Deserializer};

/// Open-ended filter parameters appended verbatim to a search query string.
///
/// Keys iterate in sorted order, so the resulting URL is deterministic.
pub type Filters = std::collections::BTreeMap<String, String>;

/// Decode `null` as the type's default value.
///
/// The API sends `null` for empty lists on some records.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
