//! Enumeration types for API parameters.

use serde::{Deserialize, Serialize};

/// Paper pool that single-paper recommendations are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationPool {
    /// Recently published papers.
    #[default]
    Recent,
    /// All computer science papers.
    AllCs,
}

impl RecommendationPool {
    /// Wire value for the `from` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::AllCs => "all-cs",
        }
    }
}

impl std::fmt::Display for RecommendationPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
