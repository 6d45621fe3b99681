//! Shared test support: a recording stub transport.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Method, Request, Response, Url};

use semantic_scholar_client::client::HttpTransport;
use semantic_scholar_client::config::Config;
use semantic_scholar_client::SemanticScholarClient;

/// Base URL used by stub-backed clients.
pub const BASE: &str = "https://api.test/v1";

/// What the stub sends back for one request.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// An HTTP response with the given status and body.
    Response { status: u16, body: String },
    /// A transport failure.
    Fail(String),
}

impl StubReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Response { status: 200, body: body.into() }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Response { status, body: body.into() }
    }
}

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub content_type: Option<String>,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    /// Decoded query pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        serde_urlencoded::from_str(self.url.query().unwrap_or("")).expect("valid query string")
    }

    /// First value of a query parameter.
    pub fn param(&self, key: &str) -> Option<String> {
        self.query_pairs().into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Request body parsed as JSON.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().expect("request has a body"))
            .expect("request body is JSON")
    }
}

type Responder = dyn Fn(&RecordedRequest) -> StubReply + Send + Sync;

/// Transport double that records requests and answers from a closure.
pub struct StubTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    /// Answer every request with `reply`.
    pub fn reply(reply: StubReply) -> Arc<Self> {
        Self::with(move |_| reply.clone())
    }

    /// Answer every request with 200 and `body`.
    pub fn ok(body: impl Into<String>) -> Arc<Self> {
        Self::reply(StubReply::ok(body))
    }

    /// Answer each request by inspecting it.
    pub fn with<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&RecordedRequest) -> StubReply + Send + Sync + 'static,
    {
        Arc::new(Self { responder: Box::new(responder), requests: Mutex::new(Vec::new()) })
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request seen so far.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: Request) -> reqwest_middleware::Result<Response> {
        let recorded = RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            content_type: request
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: request.body().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec),
        };

        let reply = (self.responder)(&recorded);
        self.requests.lock().unwrap().push(recorded);

        match reply {
            StubReply::Response { status, body } => {
                let response = http::Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap();
                Ok(Response::from(response))
            }
            StubReply::Fail(message) => {
                Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(message)))
            }
        }
    }
}

/// Client whose APIs all live under [`BASE`], backed by `stub`.
pub fn stub_client(stub: &Arc<StubTransport>) -> SemanticScholarClient {
    SemanticScholarClient::with_transport(Config::with_base_url(BASE), Arc::clone(stub)).unwrap()
}
