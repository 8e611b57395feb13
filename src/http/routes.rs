//! Route handlers

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::server::AppState;
use crate::mcp::{McpHandler, McpRequest, McpResponse};
use crate::types::DEFAULT_TOP_N;

/// Query string of the REST shortcut
#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub top_n: Option<i64>,
}

/// Liveness banner
pub(crate) async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "Naver Keyword MCP Server",
    }))
}

/// Health check endpoint
pub(crate) async fn health_handler() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

/// JSON-RPC entry point
///
/// The body is parsed by hand so malformed JSON still gets a JSON-RPC reply.
pub(crate) async fn mcp_post_handler(State(state): State<AppState>, body: Bytes) -> Json<McpResponse> {
    let response = match McpRequest::parse(&body) {
        Ok(request) => state.handler.handle_request(request).await,
        Err(response) => {
            debug!("Rejected malformed JSON-RPC body");
            response
        }
    };
    Json(response)
}

/// REST shortcut returning the ranked result (or its error object) directly
pub(crate) async fn keywords_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
    Query(query): Query<KeywordQuery>,
) -> Json<Value> {
    let top_n = query.top_n.unwrap_or(DEFAULT_TOP_N);
    debug!(keyword = %keyword, top_n, "REST keyword lookup");

    match state.handler.lookup(&keyword, top_n).await {
        Ok(result) => Json(json!(result)),
        Err(error) => Json(error),
    }
}
