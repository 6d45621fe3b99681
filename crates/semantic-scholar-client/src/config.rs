//! Configuration for the Semantic Scholar client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Recommendations API endpoint.
    pub const RECOMMENDATIONS_API: &str = "https://api.semanticscholar.org/recommendations/v1";

    /// Datasets API endpoint.
    pub const DATASETS_API: &str = "https://api.semanticscholar.org/datasets/v1";

    /// Request timeout bounding a hung request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent by the default transport.
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Field selector presets for the `fields` argument of each operation.
pub mod fields {
    /// Minimal paper fields for compact responses.
    pub const PAPER_MINIMAL: &[&str] = &["paperId", "title", "year", "citationCount", "authors"];

    /// Default paper fields for most use cases.
    pub const PAPER_DEFAULT: &[&str] = &[
        "paperId",
        "corpusId",
        "title",
        "abstract",
        "url",
        "year",
        "venue",
        "publicationDate",
        "citationCount",
        "referenceCount",
        "fieldsOfStudy",
        "authors",
        "isOpenAccess",
        "openAccessPdf",
        "externalIds",
    ];

    /// Author fields for author queries.
    pub const AUTHOR_DEFAULT: &[&str] = &[
        "authorId",
        "name",
        "url",
        "affiliations",
        "homepage",
        "paperCount",
        "citationCount",
        "hIndex",
    ];
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for Graph API (authors, papers).
    pub graph_api_url: String,

    /// Base URL for Recommendations API.
    pub recommendations_api_url: String,

    /// Base URL for Datasets API (releases, datasets, diffs).
    pub datasets_api_url: String,

    /// Request timeout for the default transport.
    pub request_timeout: Duration,

    /// Connection timeout for the default transport.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at the public Semantic Scholar API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph_api_url: api::GRAPH_API.to_string(),
            recommendations_api_url: api::RECOMMENDATIONS_API.to_string(),
            datasets_api_url: api::DATASETS_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a configuration that routes every API through one base URL.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            graph_api_url: base_url.to_string(),
            recommendations_api_url: base_url.to_string(),
            datasets_api_url: base_url.to_string(),
            ..Self::new()
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            recommendations_api_url: format!("{}/recommendations/v1", base_url),
            datasets_api_url: format!("{}/datasets/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
