//! Algolia-compatible multi-query source.
//!
//! Sends one `POST /1/indexes/*/queries` per keystroke:
//!
//! ```json
//! {"requests":[{"indexName":"instant_search","query":"fire",
//!               "hitsPerPage":5,"highlightPreTag":"<mark>","highlightPostTag":"</mark>"}]}
//! ```
//!
//! and flattens the `hits` of every entry in `results`, in order. The client
//! speaks plain HTTP through hyper; point `base_url` at a local proxy or a
//! compatible server when the index sits behind TLS.

use crate::{absorb, record::hit_from_record, SourceError};
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::FutureExt;
use http_body_util::{BodyExt, Full};
use hyper::{header, Method, Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::{Deserialize, Serialize};
use typeahead_core::config::{AlgoliaConfig, SearchConfig};
use typeahead_core::{Hit, Source};

const QUERIES_PATH: &str = "/1/indexes/*/queries";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct MultiQuery<'a> {
    requests: Vec<IndexQuery<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexQuery<'a> {
    index_name: &'a str,
    query: &'a str,
    hits_per_page: usize,
    highlight_pre_tag: &'a str,
    highlight_post_tag: &'a str,
}

#[derive(Debug, Deserialize)]
struct MultiResponse {
    results: Vec<IndexResult>,
}

#[derive(Debug, Deserialize)]
struct IndexResult {
    #[serde(default)]
    hits: Vec<serde_json::Map<String, serde_json::Value>>,
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AlgoliaSource {
    client: Client<HttpConnector, Full<Bytes>>,
    endpoint: Uri,
    app_id: String,
    api_key: String,
    agent: String,
    index_name: String,
    hits_per_page: usize,
    label_attribute: String,
    highlight_pre_tag: String,
    highlight_post_tag: String,
}

impl AlgoliaSource {
    /// Build a client from the `[algolia]` and `[search]` config sections.
    /// Requests need a tokio runtime; construction does not.
    pub fn new(algolia: &AlgoliaConfig, search: &SearchConfig) -> Result<Self, SourceError> {
        let endpoint = endpoint(&algolia.base_url)?;
        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self {
            client,
            endpoint,
            app_id: algolia.app_id.clone(),
            api_key: algolia.api_key.clone(),
            agent: algolia.agent.clone(),
            index_name: algolia.index_name.clone(),
            hits_per_page: search.hits_per_page,
            label_attribute: search.label_attribute.clone(),
            highlight_pre_tag: search.highlight_pre_tag.clone(),
            highlight_post_tag: search.highlight_post_tag.clone(),
        })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Run one query and return the flattened hits, surfacing every failure.
    pub async fn search(&self, query: &str) -> Result<Vec<Hit>, SourceError> {
        let request = self.prepare(query)?;
        execute(&self.client, &self.label_attribute, request).await
    }

    fn prepare(&self, query: &str) -> Result<Request<Full<Bytes>>, SourceError> {
        let body = serde_json::to_vec(&MultiQuery {
            requests: vec![IndexQuery {
                index_name: &self.index_name,
                query,
                hits_per_page: self.hits_per_page,
                highlight_pre_tag: &self.highlight_pre_tag,
                highlight_post_tag: &self.highlight_post_tag,
            }],
        })?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-algolia-application-id", &self.app_id)
            .header("x-algolia-api-key", &self.api_key)
            .header("x-algolia-agent", &self.agent)
            .body(Full::new(Bytes::from(body)))?;
        Ok(request)
    }
}

impl Source for AlgoliaSource {
    fn name(&self) -> &str {
        "algolia"
    }

    fn suggestions(&self, query: &str) -> BoxFuture<'static, Vec<Hit>> {
        let prepared = self.prepare(query);
        let client = self.client.clone();
        let label_attribute = self.label_attribute.clone();
        let query = query.to_string();
        async move {
            let result = match prepared {
                Ok(request) => execute(&client, &label_attribute, request).await,
                Err(e) => Err(e),
            };
            absorb("algolia", &query, result)
        }
        .boxed()
    }
}

async fn execute(
    client: &Client<HttpConnector, Full<Bytes>>,
    label_attribute: &str,
    request: Request<Full<Bytes>>,
) -> Result<Vec<Hit>, SourceError> {
    let response = client.request(request).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();

    if !status.is_success() {
        return Err(SourceError::Status {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let parsed: MultiResponse = serde_json::from_slice(&body)?;
    Ok(flatten(parsed, label_attribute))
}

fn flatten(response: MultiResponse, label_attribute: &str) -> Vec<Hit> {
    response
        .results
        .into_iter()
        .flat_map(|result| result.hits)
        .enumerate()
        .map(|(position, record)| hit_from_record(position, record, label_attribute))
        .collect()
}

fn endpoint(base_url: &str) -> Result<Uri, SourceError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), QUERIES_PATH);
    let uri: Uri = url.parse().map_err(|source| SourceError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    if uri.scheme_str() != Some("http") {
        return Err(SourceError::UnsupportedScheme(base_url.to_string()));
    }
    Ok(uri)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
