//! Middleware for the default HTTP transport.
//!
//! Logs every request and its outcome through `tracing`. Composed into a
//! `reqwest_middleware::ClientWithMiddleware` by [`super::SemanticScholarClient::new`].

use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Request/response logging middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracing;

#[async_trait::async_trait]
impl Middleware for RequestTracing {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        tracing::debug!(%method, %url, "Sending request");

        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(response) => {
                tracing::debug!(
                    %method,
                    %url,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "Received response"
                );
            }
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, elapsed_ms, "Request failed");
            }
        }

        result
    }
}
