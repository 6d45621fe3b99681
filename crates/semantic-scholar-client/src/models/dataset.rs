//! Datasets API models: releases, dataset metadata and incremental diffs.
//!
//! The Datasets API uses snake_case keys, except `README`.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Metadata describing one dated release of the dataset collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Release ID (e.g. `2023-03-28`).
    #[serde(default)]
    pub release_id: String,

    /// License and usage notes for the release.
    #[serde(default, rename = "README")]
    pub readme: String,

    /// Datasets available in this release.
    #[serde(default, deserialize_with = "null_as_default")]
    pub datasets: Vec<DatasetSummary>,
}

impl Release {
    /// Look up a dataset summary by name.
    #[must_use]
    pub fn dataset(&self, name: &str) -> Option<&DatasetSummary> {
        self.datasets.iter().find(|d| d.name == name)
    }
}

/// Summary of a dataset available in a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Dataset name (e.g. `papers`, `s2orc`).
    #[serde(default)]
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Dataset documentation.
    #[serde(default, rename = "README")]
    pub readme: String,
}

/// Detailed metadata and download links for a dataset within a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Dataset name.
    #[serde(default)]
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Dataset documentation.
    #[serde(default, rename = "README")]
    pub readme: String,

    /// Pre-signed download URLs, one per file shard.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,
}

/// Files to apply when advancing a dataset from one release to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDiff {
    /// Release the diff applies to.
    #[serde(default)]
    pub from_release: String,

    /// Release the diff produces.
    #[serde(default)]
    pub to_release: String,

    /// URLs of files with records to insert or update.
    #[serde(default, deserialize_with = "null_as_default")]
    pub update_files: Vec<String>,

    /// URLs of files with records to delete.
    #[serde(default, deserialize_with = "null_as_default")]
    pub delete_files: Vec<String>,
}

/// Ordered chain of diffs between two releases of one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDiffList {
    /// Dataset name.
    #[serde(default)]
    pub dataset: String,

    /// First release of the chain.
    #[serde(default)]
    pub start_release: String,

    /// Last release of the chain.
    #[serde(default)]
    pub end_release: String,

    /// Diffs in application order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub diffs: Vec<DatasetDiff>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserialize() {
        let json = r#"{
            "release_id": "2023-03-28",
            "README": "Subject to license",
            "datasets": [
                {"name": "papers", "description": "Core metadata", "README": "papers readme"},
                {"name": "s2orc", "description": "Full text", "README": "s2orc readme"}
            ]
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.release_id, "2023-03-28");
        assert_eq!(release.readme, "Subject to license");
        assert_eq!(release.datasets.len(), 2);
        assert_eq!(release.dataset("s2orc").map(|d| d.description.as_str()), Some("Full text"));
        assert!(release.dataset("missing").is_none());
    }

    #[test]
    fn test_readme_key_is_case_sensitive() {
        let json = r#"{"name": "papers", "readme": "lowercase key"}"#;
        let summary: DatasetSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.readme, "");
    }

    #[test]
    fn test_diff_list_deserialize() {
        let json = r#"{
            "dataset": "papers",
            "start_release": "r1",
            "end_release": "r3",
            "diffs": [
                {"from_release": "r1", "to_release": "r2", "update_files": ["u1"], "delete_files": []},
                {"from_release": "r2", "to_release": "r3", "update_files": ["u2", "u3"], "delete_files": null}
            ]
        }"#;
        let list: DatasetDiffList = serde_json::from_str(json).unwrap();
        assert_eq!(list.diffs.len(), 2);
        assert_eq!(list.diffs[1].update_files, ["u2", "u3"]);
        assert!(list.diffs[1].delete_files.is_empty());
    }
}
