//! HTTP transport seam.
//!
//! [`Transport`] is the only place a real network stack appears. The
//! browser implementation rides on `gloo-net`; tests drive the client with
//! a scripted implementation; server-side rendering gets a stub that fails
//! every call, mirroring how these endpoints are only meaningful in the
//! browser.

use serde_json::Value;

use crate::net::error::ApiError;

/// HTTP methods used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully built request: absolute URL, headers, and an optional JSON body.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Value of the first header with the given name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response the transport managed to receive, whatever its status.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure below the HTTP layer: no response was received at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("browser transport unavailable")]
    Unavailable,
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(_) => Self::Network,
            TransportError::Unavailable => Self::Unavailable,
        }
    }
}

/// Sends a built request and returns whatever response came back.
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport used when no browser is available; every call fails.
pub struct NoopTransport;

impl Transport for NoopTransport {
    async fn send(&self, _request: ApiRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Unavailable)
    }
}

/// Browser transport over `gloo-net`.
#[cfg(feature = "hydrate")]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };

        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let built = match request.body {
            Some(ref body) => builder
                .body(body.to_string())
                .map_err(|e| TransportError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| TransportError::Network(e.to_string()))?,
        };

        let response = built
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
