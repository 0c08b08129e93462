//! Point-in-time + search_after pagination

use async_stream::try_stream;
use futures::Stream;
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::response::Item;

/// Merge the caller's query with the pit clause, a sort specification and
/// the search_after cursor from the previous page.
///
/// Without a caller-provided sort, `_shard_doc` keeps pagination stable.
fn page_body(query: &Value, pit_id: &str, keep_alive: &str, last_sort: Option<&Value>) -> Value {
    let mut body = match query {
        Value::Object(map) => map.clone(),
        other => {
            let mut map = Map::new();
            map.insert("query".to_string(), other.clone());
            map
        }
    };

    body.insert(
        "pit".to_string(),
        json!({ "id": pit_id, "keep_alive": keep_alive }),
    );
    if !body.contains_key("sort") {
        body.insert("sort".to_string(), json!([{ "_shard_doc": "asc" }]));
    }
    if let Some(sort) = last_sort {
        body.insert("search_after".to_string(), sort.clone());
    }

    Value::Object(body)
}

/// Drive a point-in-time cursor until the server returns an empty page.
///
/// Opens the pit first (yields nothing), then pages through `_search`
/// with the pit id and the last page's sort values. Elasticsearch renews
/// the pit id on every page; a non-empty page that omits the renewed id
/// or the final hit's sort values is a protocol violation and fails the
/// stream. This is intentionally stricter than the scroll fallback.
pub(crate) fn search_after_stream(
    executor: Executor,
    index: String,
    body: Value,
    keep_alive: String,
) -> impl Stream<Item = Result<Item>> {
    try_stream! {
        let mut pit_id = executor.open_pit(&index, &keep_alive).await?;
        let mut last_sort: Option<Value> = None;

        loop {
            let request = page_body(&body, &pit_id, &keep_alive, last_sort.as_ref());
            let page = executor
                .search_page("_search".to_string(), Vec::new(), &request)
                .await?;

            if page.hits.hits.is_empty() {
                break;
            }

            pit_id = page.pit_id.ok_or_else(|| {
                Error::Protocol(
                    "search_after page returned hits without a renewed point-in-time id"
                        .to_string(),
                )
            })?;
            let sort = page
                .hits
                .hits
                .last()
                .and_then(|hit| hit.sort.clone())
                .ok_or_else(|| {
                    Error::Protocol(
                        "search_after page returned hits without sort values on the last hit"
                            .to_string(),
                    )
                })?;
            last_sort = Some(sort);

            for hit in page.hits.hits {
                yield Item::from(hit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_injected() {
        let body = page_body(&json!({ "query": { "match_all": {} } }), "p1", "1m", None);
        assert_eq!(body["sort"], json!([{ "_shard_doc": "asc" }]));
        assert_eq!(body["pit"], json!({ "id": "p1", "keep_alive": "1m" }));
        assert!(body.get("search_after").is_none());
    }

    #[test]
    fn test_caller_sort_is_preserved() {
        let query = json!({ "query": { "match_all": {} }, "sort": [{ "ts": "desc" }] });
        let body = page_body(&query, "p1", "1m", None);
        assert_eq!(body["sort"], json!([{ "ts": "desc" }]));
    }

    #[test]
    fn test_search_after_carries_previous_sort() {
        let marker = json!([42, "doc-7"]);
        let body = page_body(&json!({}), "p2", "5m", Some(&marker));
        assert_eq!(body["search_after"], marker);
        assert_eq!(body["pit"]["id"], json!("p2"));
    }
}
