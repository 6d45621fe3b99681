//! Semantic Scholar API client.
//!
//! Every operation follows the same shape:
//! - build the endpoint URL and query string ([`query::Endpoint`])
//! - send through the injected [`HttpTransport`]
//! - treat anything but `200 OK` as a status error
//! - decode the JSON body into the declared result type
//!
//! The default transport is a reqwest client with a 10 second timeout
//! and request tracing. Operations live in `authors`, `papers`,
//! `recommendations` and `datasets`.

mod authors;
mod datasets;
mod middleware;
mod papers;
mod query;
mod recommendations;
mod transport;

pub use middleware::RequestTracing;
pub use transport::HttpTransport;

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode, Url};
use reqwest_middleware::ClientBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// What to keep from the body of a non-200 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorBody {
    /// Drop the body; the status code alone is reported.
    Discard,
    /// Read the body into the error. Batch endpoints explain rejected ID lists there.
    Capture,
}

/// Semantic Scholar API client.
///
/// Cheap to clone; clones share the transport. Holds no mutable state, so
/// one instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP transport.
    transport: Arc<dyn HttpTransport>,

    /// Graph API base URL.
    graph_api_url: Url,

    /// Recommendations API base URL.
    recommendations_api_url: Url,

    /// Datasets API base URL.
    datasets_api_url: Url,
}

impl SemanticScholarClient {
    /// Create a new client with the default network transport.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails or a base URL is invalid.
    pub fn new(config: Config) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .user_agent(api::USER_AGENT)
            .gzip(true)
            .build()?;

        let client = ClientBuilder::new(client).with(RequestTracing).build();

        Self::with_transport(config, client)
    }

    /// Create a client that sends every request through `transport`.
    ///
    /// # Errors
    ///
    /// Returns error if a configured base URL is invalid.
    pub fn with_transport<T>(config: Config, transport: T) -> ClientResult<Self>
    where
        T: HttpTransport + 'static,
    {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Create a client from an already shared transport.
    ///
    /// # Errors
    ///
    /// Returns error if a configured base URL is invalid.
    pub fn with_shared_transport(
        config: Config,
        transport: Arc<dyn HttpTransport>,
    ) -> ClientResult<Self> {
        Ok(Self {
            transport,
            graph_api_url: query::parse_base_url(&config.graph_api_url)?,
            recommendations_api_url: query::parse_base_url(&config.recommendations_api_url)?,
            datasets_api_url: query::parse_base_url(&config.datasets_api_url)?,
        })
    }

    /// Make a GET request.
    async fn get<T>(&self, operation: &'static str, url: Url) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let request = Request::new(Method::GET, url);
        self.execute(operation, request, ErrorBody::Discard).await
    }

    /// Make a POST request with a JSON body.
    async fn post<B, T>(
        &self,
        operation: &'static str,
        url: Url,
        body: &B,
        error_body: ErrorBody,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = Request::new(Method::POST, url);
        request.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(serde_json::to_vec(body)?.into());

        self.execute(operation, request, error_body).await
    }

    /// Send the request, check the status and decode the body.
    ///
    /// The body is read to the end on every path, so the connection goes
    /// back to the pool.
    async fn execute<T>(
        &self,
        operation: &'static str,
        request: Request,
        error_body: ErrorBody,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.transport.send(request).await?;
        let status = response.status();

        if status != StatusCode::OK {
            tracing::debug!(operation, status = status.as_u16(), "Unexpected status code");

            return Err(match error_body {
                ErrorBody::Capture => {
                    let text = response.text().await.unwrap_or_else(|e| {
                        tracing::debug!(operation, error = %e, "Failed to read error body");
                        String::new()
                    });
                    ClientError::status_with_body(operation, status.as_u16(), text)
                }
                ErrorBody::Discard => {
                    if let Err(e) = response.bytes().await {
                        tracing::debug!(operation, error = %e, "Failed to drain error body");
                    }
                    ClientError::status_code(operation, status.as_u16())
                }
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode { operation, source: e }
            } else {
                ClientError::Http(e)
            }
        })
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("graph_api_url", &self.graph_api_url.as_str())
            .field("recommendations_api_url", &self.recommendations_api_url.as_str())
            .field("datasets_api_url", &self.datasets_api_url.as_str())
            .finish()
    }
}
