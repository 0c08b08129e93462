//! Injected HTTP transport and its reqwest implementation
//!
//! The executor never opens connections itself: everything goes through the
//! [`Transport`] trait, so tests can script the wire and production code
//! shares one pooled [`reqwest::Client`]. Request/response logging lives
//! here, in one place, with the `Authorization` header never logged.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::Result;

pub use reqwest::Method;

/// One HTTP call, described independently of the underlying client.
/// `path` is relative to the cluster base URL (no leading slash).
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<TransportBody>,
}

#[derive(Debug, Clone)]
pub enum TransportBody {
    Json(String),
    /// Newline-delimited JSON for `_bulk`, passed through verbatim.
    NdJson(String),
}

impl TransportBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            TransportBody::Json(_) => "application/json",
            TransportBody::NdJson(_) => "application/x-ndjson",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransportBody::Json(body) | TransportBody::NdJson(body) => body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the executor and the network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Production transport over a shared, pooled `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    auth_header: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing client (and its connection pool).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            auth_header: config.credentials.as_ref().map(|c| c.header_value()),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let url = self.base_url.join(&request.path)?;

        debug!(
            method = %request.method,
            url = %url,
            query = ?request.query,
            content_type = request.body.as_ref().map(TransportBody::content_type),
            body = request.body.as_ref().map(TransportBody::as_str),
            "elasticsearch request"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .query(&request.query);
        if let Some(header) = &self.auth_header {
            builder = builder.header(reqwest::header::AUTHORIZATION, header);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, body.content_type())
                .body(body.as_str().to_string());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, body = %body, "elasticsearch response");

        Ok(TransportResponse { status, body })
    }
}
