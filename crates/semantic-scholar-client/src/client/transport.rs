//! Pluggable HTTP transport.
//!
//! The client only needs "send a request, get a response or an error".
//! Anything implementing [`HttpTransport`] can stand in for the network,
//! including middleware stacks and test doubles.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::ClientWithMiddleware;

/// Sends a fully built request and returns the raw response.
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request.
    async fn send(&self, request: Request) -> reqwest_middleware::Result<Response>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: Request) -> reqwest_middleware::Result<Response> {
        Ok(self.execute(request).await?)
    }
}

#[async_trait]
impl HttpTransport for ClientWithMiddleware {
    async fn send(&self, request: Request) -> reqwest_middleware::Result<Response> {
        self.execute(request).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: Request) -> reqwest_middleware::Result<Response> {
        (**self).send(request).await
    }
}
