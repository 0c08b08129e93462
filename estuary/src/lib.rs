//! estuary — streaming execution layer for a typed Elasticsearch client
//!
//! This crate turns request descriptions (search, bulk, CRUD,
//! aggregation) into HTTP calls against an Elasticsearch-compatible
//! cluster, decodes the typed response envelopes, and exposes large
//! result sets as a lazily produced stream of items instead of a single
//! in-memory payload.
//!
//! Two pagination protocols are supported behind one stream shape:
//! scroll, and point-in-time + search_after. Cursor state lives inside
//! each stream; there are no retries, no timeouts and no shared mutable
//! state — failures propagate immediately and deadlines belong to the
//! transport or the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use estuary::{Client, ClientConfig, Request, StreamConfig};
//! use futures::StreamExt;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> estuary::Result<()> {
//!     let config = ClientConfig::new("http://localhost:9200")?
//!         .with_credentials("elastic", "changeme");
//!     let client = Client::new(config);
//!
//!     // One-shot search
//!     let outcome = client
//!         .execute(&Request::Search {
//!             index: "articles".to_string(),
//!             body: json!({ "query": { "match": { "title": "rust" } } }),
//!             routing: None,
//!         })
//!         .await?;
//!
//!     // Streamed search: pages are fetched as the consumer advances
//!     let mut hits = client.stream(
//!         "articles",
//!         json!({ "query": { "match_all": {} } }),
//!         StreamConfig::search_after(),
//!     );
//!     while let Some(item) = hits.next().await {
//!         let item = item?;
//!         println!("{}", item.source);
//!     }
//!
//!     let _ = outcome;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod stream;
pub mod transport;

mod executor;

pub use client::Client;
pub use config::{ClientConfig, Credentials, StreamConfig};
pub use error::{Error, Result};
pub use request::{Refresh, Request};
pub use response::{CreationOutcome, DeletionOutcome, Item, Outcome};
pub use stream::ItemStream;
pub use transport::{
    HttpTransport, Method, Transport, TransportBody, TransportRequest, TransportResponse,
};
