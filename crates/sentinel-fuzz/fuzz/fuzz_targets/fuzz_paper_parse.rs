#![no_main]

use libfuzzer_sys::fuzz_target;
use semantic_scholar_client::models::{Paper, PaperSearchResult};

fuzz_target!(|data: &[u8]| {
    // Decoding must return Ok or Err, never panic
    let _ = serde_json::from_slice::<Paper>(data);
    let _ = serde_json::from_slice::<PaperSearchResult>(data);
});
