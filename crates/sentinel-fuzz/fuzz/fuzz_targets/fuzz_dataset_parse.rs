#![no_main]

use libfuzzer_sys::fuzz_target;
use semantic_scholar_client::models::{DatasetDiffList, DatasetMetadata, Release};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<Release>(data);
    let _ = serde_json::from_slice::<DatasetMetadata>(data);
    let _ = serde_json::from_slice::<DatasetDiffList>(data);
});
