//! HTTP executor: one request variant, one HTTP call, one classified result
//!
//! Every operation builds exactly one call (method, path, query, body),
//! dispatches it through the injected transport and runs the response
//! through the status-code decision table. Failures classify uniformly:
//! the wire contract for errors is the same across all Elasticsearch
//! endpoints, so there is a single classifier instead of per-operation
//! handling.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::request::{present_params, Refresh, Request};
use crate::response::{
    AggregateResponse, CountResponse, CreatedResponse, CreationOutcome, DeletionOutcome,
    GetResponse, Item, OpenPitResponse, Outcome, SearchResponse,
};
use crate::transport::{Method, Transport, TransportBody, TransportRequest, TransportResponse};

/// 401/403 are an authorization failure, anything else a generic one
/// carrying the raw body for diagnosis.
fn classify_failure(response: TransportResponse) -> Error {
    match response.status {
        401 | 403 => Error::Unauthorized {
            status: response.status,
            body: response.body,
        },
        _ => Error::Response {
            status: response.status,
            body: response.body,
        },
    }
}

fn refresh_param(refresh: &Option<Refresh>) -> Option<String> {
    refresh.map(|r| r.as_str().to_string())
}

#[derive(Clone)]
pub(crate) struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        body: Option<TransportBody>,
    ) -> Result<TransportResponse> {
        self.transport
            .send(TransportRequest {
                method,
                path,
                query,
                body,
            })
            .await
    }

    async fn send_json(
        &self,
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        body: &Value,
    ) -> Result<TransportResponse> {
        self.send(method, path, query, Some(TransportBody::Json(body.to_string())))
            .await
    }

    /// One search-shaped call expected to return 200 with a decodable
    /// page. Shared by plain search and both pagination protocols.
    pub(crate) async fn search_page(
        &self,
        path: String,
        query: Vec<(String, String)>,
        body: &Value,
    ) -> Result<SearchResponse> {
        let response = self.send_json(Method::POST, path, query, body).await?;
        match response.status {
            200 => Ok(serde_json::from_str(&response.body)?),
            _ => Err(classify_failure(response)),
        }
    }

    /// Open a point-in-time context on an index, returning the initial id.
    pub(crate) async fn open_pit(&self, index: &str, keep_alive: &str) -> Result<String> {
        let response = self
            .send(
                Method::POST,
                format!("{index}/_pit"),
                vec![("keep_alive".to_string(), keep_alive.to_string())],
                None,
            )
            .await?;
        match response.status {
            200 => {
                let decoded: OpenPitResponse = serde_json::from_str(&response.body)?;
                Ok(decoded.id)
            }
            _ => Err(classify_failure(response)),
        }
    }

    /// Execute one request and classify the response. The match is
    /// exhaustive on purpose: a new request variant will not compile
    /// until it gets a row in the decision table.
    pub(crate) async fn execute(&self, request: &Request) -> Result<Outcome> {
        match request {
            Request::Search { index, body, routing } => {
                let page = self
                    .search_page(
                        format!("{index}/_search"),
                        present_params(&[("routing", routing.clone())]),
                        body,
                    )
                    .await?;
                Ok(Outcome::Search(page.hits.hits.into_iter().map(Item::from).collect()))
            }

            Request::Bulk { index, body, refresh } => {
                let path = match index {
                    Some(index) => format!("{index}/_bulk"),
                    None => "_bulk".to_string(),
                };
                let response = self
                    .send(
                        Method::POST,
                        path,
                        present_params(&[("refresh", refresh_param(refresh))]),
                        Some(TransportBody::NdJson(body.clone())),
                    )
                    .await?;
                match response.status {
                    200 => Ok(Outcome::Bulk(serde_json::from_str(&response.body)?)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::Count { index, body, routing } => {
                let response = self
                    .send_json(
                        Method::POST,
                        format!("{index}/_count"),
                        present_params(&[("routing", routing.clone())]),
                        body,
                    )
                    .await?;
                match response.status {
                    200 => {
                        let decoded: CountResponse = serde_json::from_str(&response.body)?;
                        Ok(Outcome::Count(decoded.count))
                    }
                    _ => Err(classify_failure(response)),
                }
            }

            Request::Create { index, document, routing, refresh } => {
                let response = self
                    .send_json(
                        Method::POST,
                        format!("{index}/_doc"),
                        present_params(&[
                            ("routing", routing.clone()),
                            ("refresh", refresh_param(refresh)),
                        ]),
                        document,
                    )
                    .await?;
                match response.status {
                    201 => {
                        let decoded: CreatedResponse = serde_json::from_str(&response.body)?;
                        Ok(Outcome::Created(decoded.id))
                    }
                    _ => Err(classify_failure(response)),
                }
            }

            Request::CreateWithId { index, id, document, routing, refresh } => {
                let response = self
                    .send_json(
                        Method::POST,
                        format!("{index}/_create/{id}"),
                        present_params(&[
                            ("routing", routing.clone()),
                            ("refresh", refresh_param(refresh)),
                        ]),
                        document,
                    )
                    .await?;
                match response.status {
                    201 => Ok(Outcome::Create(CreationOutcome::Created)),
                    409 => Ok(Outcome::Create(CreationOutcome::AlreadyExists)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::CreateOrUpdate { index, id, document, routing, refresh } => {
                let response = self
                    .send_json(
                        Method::PUT,
                        format!("{index}/_doc/{id}"),
                        present_params(&[
                            ("routing", routing.clone()),
                            ("refresh", refresh_param(refresh)),
                        ]),
                        document,
                    )
                    .await?;
                match response.status {
                    200 | 201 => Ok(Outcome::CreateOrUpdate),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::CreateIndex { index, body } => {
                let response = self
                    .send_json(Method::PUT, index.clone(), Vec::new(), body)
                    .await?;
                match response.status {
                    200 => Ok(Outcome::CreateIndex(CreationOutcome::Created)),
                    // ES answers 400 (resource_already_exists_exception)
                    // for an index that is already there.
                    400 => Ok(Outcome::CreateIndex(CreationOutcome::AlreadyExists)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::DeleteById { index, id, routing, refresh } => {
                let response = self
                    .send(
                        Method::DELETE,
                        format!("{index}/_doc/{id}"),
                        present_params(&[
                            ("routing", routing.clone()),
                            ("refresh", refresh_param(refresh)),
                        ]),
                        None,
                    )
                    .await?;
                match response.status {
                    200 => Ok(Outcome::Delete(DeletionOutcome::Deleted)),
                    404 => Ok(Outcome::Delete(DeletionOutcome::NotFound)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::DeleteByQuery { index, body, refresh } => {
                let response = self
                    .send_json(
                        Method::POST,
                        format!("{index}/_delete_by_query"),
                        present_params(&[("refresh", refresh_param(refresh))]),
                        body,
                    )
                    .await?;
                match response.status {
                    200 => Ok(Outcome::Delete(DeletionOutcome::Deleted)),
                    404 => Ok(Outcome::Delete(DeletionOutcome::NotFound)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::DeleteIndex { index } => {
                let response = self
                    .send(Method::DELETE, index.clone(), Vec::new(), None)
                    .await?;
                match response.status {
                    200 => Ok(Outcome::DeleteIndex(DeletionOutcome::Deleted)),
                    404 => Ok(Outcome::DeleteIndex(DeletionOutcome::NotFound)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::Exists { index, id, routing } => {
                let response = self
                    .send(
                        Method::HEAD,
                        format!("{index}/_doc/{id}"),
                        present_params(&[("routing", routing.clone())]),
                        None,
                    )
                    .await?;
                match response.status {
                    200 => Ok(Outcome::Exists(true)),
                    404 => Ok(Outcome::Exists(false)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::GetById { index, id, routing } => {
                let response = self
                    .send(
                        Method::GET,
                        format!("{index}/_doc/{id}"),
                        present_params(&[("routing", routing.clone())]),
                        None,
                    )
                    .await?;
                match response.status {
                    200 => {
                        let decoded: GetResponse = serde_json::from_str(&response.body)?;
                        Ok(Outcome::Get(decoded.source.map(|source| Item {
                            source,
                            highlight: None,
                        })))
                    }
                    // A missing document is an empty result, not an error.
                    404 => Ok(Outcome::Get(None)),
                    _ => Err(classify_failure(response)),
                }
            }

            Request::Aggregate { index, body, routing } => {
                let decoded = self.aggregate_page(index, body, routing).await?;
                Ok(Outcome::Aggregate(decoded.aggregations))
            }

            Request::SearchAndAggregate { index, body, routing } => {
                let decoded = self.aggregate_page(index, body, routing).await?;
                Ok(Outcome::SearchAndAggregate {
                    hits: decoded.hits.hits.into_iter().map(Item::from).collect(),
                    aggregations: decoded.aggregations,
                })
            }
        }
    }

    async fn aggregate_page(
        &self,
        index: &str,
        body: &Value,
        routing: &Option<String>,
    ) -> Result<AggregateResponse> {
        let mut query = vec![("typed_keys".to_string(), "true".to_string())];
        query.extend(present_params(&[("routing", routing.clone())]));
        let response = self
            .send_json(Method::POST, format!("{index}/_search"), query, body)
            .await?;
        match response.status {
            200 => Ok(serde_json::from_str(&response.body)?),
            _ => Err(classify_failure(response)),
        }
    }
}
