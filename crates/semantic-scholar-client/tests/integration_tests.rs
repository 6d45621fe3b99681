//! Integration tests against the live Semantic Scholar API.
//!
//! These tests hit the real API and are subject to its rate limits.
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use semantic_scholar_client::config::{Config, fields};
use semantic_scholar_client::models::Filters;
use semantic_scholar_client::SemanticScholarClient;

/// Well-known paper IDs for testing.
mod paper_ids {
    /// "Attention Is All You Need" - Vaswani et al. 2017
    pub const ATTENTION: &str = "649def34f8be52c8b66281af98ae884c09aef38b";
    /// "BERT" - Devlin et al. 2019
    pub const BERT: &str = "df2b0e26d0599ce3e70df8a9da02e51594e0e992";
}

/// Geoffrey Hinton.
const HINTON: &str = "1741101";

fn create_client() -> SemanticScholarClient {
    SemanticScholarClient::new(Config::default()).expect("Failed to create client")
}

/// Rate limiting is acceptable without an API key; anything else is a failure.
fn tolerate_rate_limit<T>(result: semantic_scholar_client::ClientResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.status() == Some(429) => {
            eprintln!("rate limited, skipping: {e}");
            None
        }
        Err(e) => panic!("API call failed: {e}"),
    }
}

#[tokio::test]
async fn test_live_get_author() {
    let client = create_client();
    if let Some(author) = tolerate_rate_limit(client.get_author(HINTON, fields::AUTHOR_DEFAULT).await) {
        assert_eq!(author.author_id, HINTON);
        assert!(author.h_index_value() > 100);
    }
}

#[tokio::test]
async fn test_live_papers_batch() {
    let client = create_client();
    let ids = vec![paper_ids::ATTENTION.to_string(), paper_ids::BERT.to_string()];
    if let Some(papers) = tolerate_rate_limit(client.get_papers_batch(&ids, fields::PAPER_MINIMAL).await) {
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].paper_id, paper_ids::ATTENTION);
    }
}

#[tokio::test]
async fn test_live_search_papers() {
    let client = create_client();
    let mut filters = Filters::new();
    filters.insert("year".to_string(), "2017".to_string());
    if let Some(page) = tolerate_rate_limit(
        client.search_papers("attention is all you need", 0, 5, fields::PAPER_MINIMAL, &filters).await,
    ) {
        assert!(page.total > 0);
    }
}

#[tokio::test]
async fn test_live_list_releases() {
    let client = create_client();
    if let Some(releases) = tolerate_rate_limit(client.list_releases().await) {
        assert!(!releases.is_empty());
    }
}
