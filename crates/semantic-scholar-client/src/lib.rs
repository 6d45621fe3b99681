//! Semantic Scholar API client
//!
//! A typed async client for the Semantic Scholar Graph, Recommendations
//! and Datasets APIs. Each operation builds one request, sends it through
//! a pluggable transport and decodes the JSON response.
//!
//! # Features
//!
//! - **Typed models**: authors, papers, search pages, recommendations, dataset releases and diffs
//! - **Pluggable transport**: any [`client::HttpTransport`], including `reqwest-middleware` stacks
//! - **Three error kinds**: transport, unexpected status, decode ([`ClientError`])
//! - **Traced**: requests and outcomes are logged through `tracing`
//!
//! No retries, caching or rate limiting: every failure is returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use semantic_scholar_client::{SemanticScholarClient, config::{Config, fields}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SemanticScholarClient::new(Config::default())?;
//!
//!     let page = client.search_authors("Turing", 0, 10, fields::AUTHOR_DEFAULT).await?;
//!     for author in &page.data {
//!         println!("{} (h-index {})", author.name_or_default(), author.h_index_value());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{HttpTransport, SemanticScholarClient};
pub use config::Config;
pub use error::{ClientError, ClientResult};
