//! Public client facade

use std::sync::Arc;

use serde_json::Value;

use crate::config::{ClientConfig, StreamConfig};
use crate::error::Result;
use crate::executor::Executor;
use crate::request::Request;
use crate::response::Outcome;
use crate::stream::{scroll_stream, search_after_stream, ItemStream};
use crate::transport::{HttpTransport, Transport};

/// Handle to one Elasticsearch cluster.
///
/// Cheap to clone; holds no mutable state, so independent requests and
/// streams may run concurrently on clones of the same client.
#[derive(Clone)]
pub struct Client {
    executor: Executor,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(&config)))
    }

    /// Build a client over an injected transport. This is the seam the
    /// tests use to script responses without a network.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            executor: Executor::new(transport),
        }
    }

    /// Execute one request: exactly one HTTP call, classified by the
    /// status decision table of the executor.
    pub async fn execute(&self, request: &Request) -> Result<Outcome> {
        self.executor.execute(request).await
    }

    /// Stream every hit of a search, fetching pages lazily as the
    /// consumer advances. `body` is the full search body; `config`
    /// selects scroll (default) or point-in-time + search_after.
    ///
    /// The stream ends when the server returns an empty page. Dropping
    /// it early issues no further calls; server-side cursors expire via
    /// their keep-alive TTL.
    pub fn stream(&self, index: &str, body: Value, config: StreamConfig) -> ItemStream {
        if config.search_after {
            Box::pin(search_after_stream(
                self.executor.clone(),
                index.to_string(),
                body,
                config.keep_alive,
            ))
        } else {
            Box::pin(scroll_stream(
                self.executor.clone(),
                index.to_string(),
                body,
                config.keep_alive,
            ))
        }
    }
}
