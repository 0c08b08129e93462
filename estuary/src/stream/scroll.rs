//! Scroll pagination

use async_stream::try_stream;
use futures::Stream;
use serde_json::{json, Value};

use crate::error::Result;
use crate::executor::Executor;
use crate::response::Item;

/// Drive a scroll cursor until the server returns an empty page.
///
/// The first call is a plain search with the `scroll` query parameter;
/// every following call renews the cursor via `_search/scroll`. A
/// non-empty page without a fresh scroll id keeps the previous id alive
/// rather than failing.
pub(crate) fn scroll_stream(
    executor: Executor,
    index: String,
    body: Value,
    keep_alive: String,
) -> impl Stream<Item = Result<Item>> {
    try_stream! {
        // Empty string is the not-yet-started sentinel.
        let mut scroll_id = String::new();

        loop {
            let page = if scroll_id.is_empty() {
                executor
                    .search_page(
                        format!("{index}/_search"),
                        vec![("scroll".to_string(), keep_alive.clone())],
                        &body,
                    )
                    .await?
            } else {
                executor
                    .search_page(
                        "_search/scroll".to_string(),
                        Vec::new(),
                        &json!({ "scroll": keep_alive, "scroll_id": scroll_id }),
                    )
                    .await?
            };

            if page.hits.hits.is_empty() {
                break;
            }

            // A page may omit the scroll id; the previous one stays valid.
            if let Some(id) = page.scroll_id {
                scroll_id = id;
            }

            for hit in page.hits.hits {
                yield Item::from(hit);
            }
        }
    }
}
