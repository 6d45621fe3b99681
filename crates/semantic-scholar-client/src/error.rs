//! Error types for the Semantic Scholar client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Every failure falls into one of three kinds: transport, status or decode.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error raised by a transport middleware
    #[error("Middleware error: {0}")]
    Middleware(reqwest_middleware::Error),

    /// Response status was not 200 OK
    #[error("{operation}: unexpected status code {status}{}", body_suffix(.body.as_deref()))]
    UnexpectedStatus {
        /// Operation that issued the request
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Raw response body (batch operations only)
        body: Option<String>,
    },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        /// Operation that issued the request
        operation: &'static str,
        /// Underlying decode failure
        #[source]
        source: reqwest::Error,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Configured base URL cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Identifier would change the request route (empty, `.` or `..`)
    #[error("Invalid path identifier: {0:?}")]
    InvalidPathSegment(String),
}

fn body_suffix(body: Option<&str>) -> String {
    body.map(|b| format!(", body: {b}")).unwrap_or_default()
}

impl From<reqwest_middleware::Error> for ClientError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::Http(e),
            other => Self::Middleware(other),
        }
    }
}

impl ClientError {
    /// Create an unexpected status error without a body.
    #[must_use]
    pub const fn status_code(operation: &'static str, status: u16) -> Self {
        Self::UnexpectedStatus { operation, status, body: None }
    }

    /// Create an unexpected status error carrying the response body.
    #[must_use]
    pub fn status_with_body(operation: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus { operation, status, body: Some(body.into()) }
    }

    /// Returns true if the request never produced a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Middleware(_))
    }

    /// Returns true if the server answered with a non-200 status.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    /// Returns true if the response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Get the HTTP status if this is a status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the captured response body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::UnexpectedStatus { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::status_code("get_author", 404);
        assert_eq!(err.to_string(), "get_author: unexpected status code 404");
        assert_eq!(err.status(), Some(404));
        assert!(err.body().is_none());
        assert!(err.is_status());
        assert!(!err.is_transport());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_status_error_with_body() {
        let err = ClientError::status_with_body("get_papers_batch", 400, "ids too long");
        assert_eq!(
            err.to_string(),
            "get_papers_batch: unexpected status code 400, body: ids too long"
        );
        assert_eq!(err.body(), Some("ids too long"));
    }

    #[test]
    fn test_middleware_error_is_transport() {
        let err = ClientError::from(reqwest_middleware::Error::Middleware(
            std::io::Error::other("connection refused").into(),
        ));
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_path_segment_message() {
        let err = ClientError::InvalidPathSegment("..".to_string());
        assert_eq!(err.to_string(), r#"Invalid path identifier: "..""#);
        assert!(!err.is_transport());
        assert!(!err.is_status());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_invalid_base_url_message() {
        let err = ClientError::InvalidBaseUrl("mailto:nobody".to_string());
        assert!(err.to_string().contains("mailto:nobody"));
        assert!(!err.is_transport());
    }
}
