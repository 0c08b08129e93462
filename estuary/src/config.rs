//! Client and stream configuration

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use url::Url;

use crate::error::Result;

/// Static basic-auth credentials attached to every outgoing call.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Pre-encoded `Authorization` header value.
    pub(crate) fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw))
    }
}

/// Connection settings for a cluster.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub credentials: Option<Credentials>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Relative path joins need the trailing slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self {
            base_url,
            credentials: None,
        })
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }
}

/// Pagination settings for [`Client::stream`](crate::Client::stream).
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Use point-in-time + search_after instead of scroll.
    pub search_after: bool,
    /// Server-side cursor TTL, passed verbatim on every cursor
    /// creation/renewal call (e.g. "1m").
    pub keep_alive: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            search_after: false,
            keep_alive: "1m".to_string(),
        }
    }
}

impl StreamConfig {
    /// Scroll pagination (the default).
    pub fn scroll() -> Self {
        Self::default()
    }

    /// Point-in-time + search_after pagination.
    pub fn search_after() -> Self {
        Self {
            search_after: true,
            ..Self::default()
        }
    }

    pub fn with_keep_alive(mut self, keep_alive: impl Into<String>) -> Self {
        self.keep_alive = keep_alive.into();
        self
    }
}
