//! Fuzzing library for semantic-scholar-client.
//!
//! This crate provides fuzzing targets for the JSON decoding of every
//! response model the client returns.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_paper_parse -- -max_total_time=60
//! ```

pub use semantic_scholar_client::models;
