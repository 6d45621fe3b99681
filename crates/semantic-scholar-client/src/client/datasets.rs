//! Datasets API endpoints: releases, dataset metadata and diffs.

use super::SemanticScholarClient;
use super::query::{Endpoint, path_id};
use crate::error::ClientResult;
use crate::models::{DatasetDiffList, DatasetMetadata, Release};

impl SemanticScholarClient {
    /// List available release IDs, oldest first.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn list_releases(&self) -> ClientResult<Vec<String>> {
        let url = Endpoint::new(&self.datasets_api_url, &["release", ""])?.build();

        self.get("list_releases", url).await
    }

    /// Get the metadata of one release.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_release(&self, release_id: &str) -> ClientResult<Release> {
        let url =
            Endpoint::new(&self.datasets_api_url, &["release", path_id(release_id)?])?.build();

        self.get("get_release", url).await
    }

    /// Get metadata and download links for one dataset within a release.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_dataset(
        &self,
        release_id: &str,
        dataset_name: &str,
    ) -> ClientResult<DatasetMetadata> {
        let url = Endpoint::new(
            &self.datasets_api_url,
            &["release", path_id(release_id)?, "dataset", path_id(dataset_name)?],
        )?
        .build();

        self.get("get_dataset", url).await
    }

    /// Get the diffs that advance `dataset_name` from `start_release_id` to `end_release_id`.
    ///
    /// Diffs are returned in application order.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_dataset_diffs(
        &self,
        start_release_id: &str,
        end_release_id: &str,
        dataset_name: &str,
    ) -> ClientResult<DatasetDiffList> {
        let url = Endpoint::new(
            &self.datasets_api_url,
            &[
                "diffs",
                path_id(start_release_id)?,
                "to",
                path_id(end_release_id)?,
                path_id(dataset_name)?,
            ],
        )?
        .build();

        self.get("get_dataset_diffs", url).await
    }
}
