//! Typed response envelopes and operation outcomes

use serde::Deserialize;
use serde_json::Value;

/// One decoded search result document.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub source: Value,
    pub highlight: Option<Value>,
}

/// Result of a create where the server reports whether the target was new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationOutcome {
    Created,
    AlreadyExists,
}

/// Result of a delete where the server reports whether the target existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    NotFound,
}

/// Result of executing one [`Request`](crate::Request), variant for variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Search(Vec<Item>),
    /// Raw bulk response; per-action results are the caller's to inspect.
    Bulk(Value),
    Count(u64),
    /// Server-assigned id of an auto-id create.
    Created(String),
    Create(CreationOutcome),
    CreateOrUpdate,
    CreateIndex(CreationOutcome),
    Delete(DeletionOutcome),
    DeleteIndex(DeletionOutcome),
    Exists(bool),
    Get(Option<Item>),
    /// Opaque aggregation JSON, keyed as the server returned it.
    Aggregate(Value),
    SearchAndAggregate {
        hits: Vec<Item>,
        aggregations: Value,
    },
}

/// ES search response, shared by plain search, scroll pages and
/// point-in-time pages.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "_scroll_id")]
    pub scroll_id: Option<String>,
    pub pit_id: Option<String>,
    pub hits: Hits,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hits {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hit {
    #[serde(rename = "_source")]
    pub source: Value,
    pub highlight: Option<Value>,
    /// Sort values, present when the search carried a `sort` clause.
    pub sort: Option<Value>,
}

impl From<Hit> for Item {
    fn from(hit: Hit) -> Self {
        Item {
            source: hit.source,
            highlight: hit.highlight,
        }
    }
}

/// Search response where aggregations are mandatory; missing aggregations
/// on an aggregate request is a decode error, not an empty default.
#[derive(Debug, Deserialize)]
pub(crate) struct AggregateResponse {
    pub hits: Hits,
    pub aggregations: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetResponse {
    #[serde(rename = "_source")]
    pub source: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenPitResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_decodes_hits() {
        let body = json!({
            "took": 3,
            "_scroll_id": "abc",
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_index": "docs", "_id": "1", "_source": { "title": "a" } },
                    {
                        "_index": "docs",
                        "_id": "2",
                        "_source": { "title": "b" },
                        "highlight": { "title": ["<em>b</em>"] },
                        "sort": [17]
                    }
                ]
            }
        });

        let decoded: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.scroll_id.as_deref(), Some("abc"));
        assert_eq!(decoded.hits.hits.len(), 2);
        assert!(decoded.hits.hits[0].highlight.is_none());
        assert_eq!(decoded.hits.hits[1].sort, Some(json!([17])));
    }

    #[test]
    fn test_hit_without_source_is_a_decode_error() {
        let body = json!({ "hits": { "hits": [ { "_id": "1" } ] } });
        assert!(serde_json::from_value::<SearchResponse>(body).is_err());
    }

    #[test]
    fn test_aggregate_response_requires_aggregations() {
        let body = json!({ "hits": { "hits": [] } });
        assert!(serde_json::from_value::<AggregateResponse>(body).is_err());
    }
}
