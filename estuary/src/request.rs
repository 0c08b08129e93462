//! Request variants and query-parameter assembly

use serde_json::Value;

/// Value of the `refresh` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    True,
    False,
    WaitFor,
}

impl Refresh {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Refresh::True => "true",
            Refresh::False => "false",
            Refresh::WaitFor => "wait_for",
        }
    }
}

/// One Elasticsearch operation, carrying everything needed to build its
/// HTTP call. Dispatched exhaustively by the executor; adding a variant
/// forces every call site to handle it.
///
/// Bodies are opaque to the executor: `Search`, `Count`, `Aggregate` and
/// friends take an already-serialized query as [`serde_json::Value`];
/// `Bulk` takes the newline-delimited payload verbatim.
#[derive(Debug, Clone)]
pub enum Request {
    Search {
        index: String,
        body: Value,
        routing: Option<String>,
    },
    Bulk {
        /// Default index for actions that omit `_index`; `None` targets `_bulk`.
        index: Option<String>,
        /// Newline-delimited JSON, passed through verbatim.
        body: String,
        refresh: Option<Refresh>,
    },
    Count {
        index: String,
        body: Value,
        routing: Option<String>,
    },
    Create {
        index: String,
        document: Value,
        routing: Option<String>,
        refresh: Option<Refresh>,
    },
    CreateWithId {
        index: String,
        id: String,
        document: Value,
        routing: Option<String>,
        refresh: Option<Refresh>,
    },
    CreateOrUpdate {
        index: String,
        id: String,
        document: Value,
        routing: Option<String>,
        refresh: Option<Refresh>,
    },
    CreateIndex {
        index: String,
        body: Value,
    },
    DeleteById {
        index: String,
        id: String,
        routing: Option<String>,
        refresh: Option<Refresh>,
    },
    DeleteByQuery {
        index: String,
        body: Value,
        refresh: Option<Refresh>,
    },
    DeleteIndex {
        index: String,
    },
    Exists {
        index: String,
        id: String,
        routing: Option<String>,
    },
    GetById {
        index: String,
        id: String,
        routing: Option<String>,
    },
    Aggregate {
        index: String,
        body: Value,
        routing: Option<String>,
    },
    SearchAndAggregate {
        index: String,
        body: Value,
        routing: Option<String>,
    },
}

/// Keep only the query parameters that actually carry a value. Absent
/// optionals are omitted entirely, never sent as `key=`.
pub(crate) fn present_params(pairs: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_params_are_omitted() {
        let params = present_params(&[
            ("refresh", Some("true".to_string())),
            ("routing", None),
        ]);
        assert_eq!(params, vec![("refresh".to_string(), "true".to_string())]);
    }

    #[test]
    fn test_all_absent_yields_empty() {
        let params = present_params(&[("refresh", None), ("routing", None)]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_refresh_wire_values() {
        assert_eq!(Refresh::True.as_str(), "true");
        assert_eq!(Refresh::False.as_str(), "false");
        assert_eq!(Refresh::WaitFor.as_str(), "wait_for");
    }
}
