//! Fake Algolia-compatible search API for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `POST /1/indexes/{index}/queries`: every request in the
//! multi-query body is answered with the loaded records whose `name`
//! contains the query (case-insensitive), capped at `hitsPerPage`, with a
//! `_highlightResult.name.value` wrapped in the requested tags.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSearchApi::start(vec![record("1", "Fire TV")]).await.unwrap();
//! // point AlgoliaConfig::base_url at api.base_url()
//! ```

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub index: String,
    pub app_id: Option<String>,
    pub api_key: Option<String>,
    pub agent: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct ApiState {
    records: Vec<Value>,
    /// When set, every request is answered with this status and no results.
    fail_with: Option<StatusCode>,
    /// When set, every request is answered with this raw body.
    raw_body: Option<String>,
    seen: Vec<SeenRequest>,
}

/// Handle to the running fake search API.
pub struct FakeSearchApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSearchApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start(records: Vec<Value>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            records,
            ..ApiState::default()
        }));

        let app = Router::new()
            .route("/1/indexes/{index}/queries", post(queries))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer every subsequent request with `status`.
    pub async fn fail_with(&self, status: StatusCode) {
        self.state.lock().await.fail_with = Some(status);
    }

    /// Answer every subsequent request with `body` verbatim (status 200).
    pub async fn respond_raw(&self, body: impl Into<String>) {
        self.state.lock().await.raw_body = Some(body.into());
    }

    /// Requests received so far.
    pub async fn seen(&self) -> Vec<SeenRequest> {
        self.state.lock().await.seen.clone()
    }
}

async fn queries(
    State(shared): State<Arc<Mutex<ApiState>>>,
    Path(index): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut state = shared.lock().await;
    state.seen.push(SeenRequest {
        index,
        app_id: header("x-algolia-application-id"),
        api_key: header("x-algolia-api-key"),
        agent: header("x-algolia-agent"),
        body: body.clone(),
    });

    if let Some(status) = state.fail_with {
        return (status, "{\"message\":\"forced failure\"}".to_string());
    }
    if let Some(raw) = &state.raw_body {
        return (StatusCode::OK, raw.clone());
    }

    let results: Vec<Value> = body["requests"]
        .as_array()
        .map(|requests| requests.iter().map(|r| answer(&state.records, r)).collect())
        .unwrap_or_default();
    (StatusCode::OK, json!({ "results": results }).to_string())
}

fn answer(records: &[Value], request: &Value) -> Value {
    let query = request["query"].as_str().unwrap_or_default().to_lowercase();
    let per_page = request["hitsPerPage"].as_u64().unwrap_or(20) as usize;
    let pre = request["highlightPreTag"].as_str().unwrap_or("<em>");
    let post = request["highlightPostTag"].as_str().unwrap_or("</em>");

    let hits: Vec<Value> = records
        .iter()
        .filter(|r| {
            r["name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&query))
        })
        .take(per_page)
        .map(|r| {
            let name = r["name"].as_str().unwrap_or_default();
            let mut hit = r.clone();
            hit["_highlightResult"] = json!({ "name": { "value": mark(name, &query, pre, post) } });
            hit
        })
        .collect();
    json!({ "hits": hits, "nbHits": hits.len() })
}

/// Wrap the first case-insensitive occurrence of `query` (ASCII only).
fn mark(name: &str, query: &str, pre: &str, post: &str) -> String {
    match name.to_lowercase().find(query) {
        Some(start) if !query.is_empty() && name.is_ascii() => {
            let end = start + query.len();
            format!("{}{pre}{}{post}{}", &name[..start], &name[start..end], &name[end..])
        }
        _ => name.to_string(),
    }
}
