use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The cluster rejected the credentials (HTTP 401/403).
    #[error("Unauthorized ({status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// Any other non-success status; the raw body is kept for diagnosis.
    #[error("Elasticsearch returned status {status}: {body}")]
    Response { status: u16, body: String },

    /// A pagination response violated the point-in-time contract.
    #[error("Pagination protocol violation: {0}")]
    Protocol(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
