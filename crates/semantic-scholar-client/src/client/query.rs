//! Endpoint URL and query-string builder shared by every operation.
//!
//! Path segments are percent-encoded for path safety, query values are
//! form-urlencoded. Optional values that are absent or empty are omitted.

use reqwest::Url;

use crate::error::{ClientError, ClientResult};
use crate::models::Filters;

/// Check that a configured base URL can carry path segments.
pub(crate) fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|_| ClientError::InvalidBaseUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

/// Check a caller-supplied identifier before it becomes a path segment.
///
/// Percent-encoding covers `/`, `?` and `#`, but URL normalization drops
/// `.` and `..` segments and an empty ID leaves a trailing slash. Each of
/// those would silently address a different route, so they are rejected.
pub(crate) fn path_id(id: &str) -> ClientResult<&str> {
    match id {
        "" | "." | ".." => Err(ClientError::InvalidPathSegment(id.to_string())),
        _ => Ok(id),
    }
}

/// URL under construction for one request.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    url: Url,
    params: Vec<(String, String)>,
}

impl Endpoint {
    /// Append `segments` to the base URL path. An empty final segment
    /// produces a trailing slash.
    pub(crate) fn new(base: &Url, segments: &[&str]) -> ClientResult<Self> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(Self { url, params: Vec::new() })
    }

    /// Add a parameter that is always sent.
    pub(crate) fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when it is present and non-empty.
    pub(crate) fn optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    /// Add the comma-joined `fields` selector unless it is empty.
    pub(crate) fn fields(self, fields: &[&str]) -> Self {
        if fields.is_empty() {
            return self;
        }
        let joined = fields.join(",");
        self.optional("fields", Some(&joined))
    }

    /// Append every filter entry verbatim.
    pub(crate) fn filters(mut self, filters: &Filters) -> Self {
        self.params.extend(filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Finish the URL. No `?` is emitted when there are no parameters.
    pub(crate) fn build(self) -> Url {
        let Self { mut url, params } = self;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }
}
