//! JSON-RPC dispatch for the keyword tool

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::protocol::{
    InitializeResult, McpHandler, McpMethod, McpRequest, McpResponse, ToolCallResult,
};
use super::tools::{get_tool_definitions, KeywordArgs, KeywordTool};
use crate::keywords::{format_keywords, render_outcome, FormatOutcome};
use crate::naver::KeywordSource;

/// Prompt returned when `tools/call` arrives without a keyword
pub const EMPTY_KEYWORD_PROMPT: &str = "키워드를 입력해주세요.";

/// MCP request handler backed by a keyword source
#[derive(Clone)]
pub struct KeywordHandler {
    source: Arc<dyn KeywordSource>,
}

impl KeywordHandler {
    pub fn new(source: Arc<dyn KeywordSource>) -> Self {
        Self { source }
    }

    /// Fetch and rank related keywords; fetch failures become error objects
    pub async fn lookup(&self, keyword: &str, top_n: i64) -> FormatOutcome {
        let raw = match self.source.fetch_related(keyword).await {
            Ok(raw) => raw,
            Err(e) => e.to_error_result().to_value(),
        };
        format_keywords(&raw, keyword, top_n)
    }

    async fn call_tool(&self, tool: KeywordTool, arguments: &Value) -> ToolCallResult {
        debug!(tool = tool.name(), "Calling tool");
        match tool {
            KeywordTool::GetNaverKeywords => {
                let args = KeywordArgs::from_arguments(arguments);
                if args.keyword.is_empty() {
                    return ToolCallResult::text(EMPTY_KEYWORD_PROMPT);
                }
                let outcome = self.lookup(&args.keyword, args.top_n).await;
                ToolCallResult::text(render_outcome(&outcome))
            }
        }
    }
}

#[async_trait]
impl McpHandler for KeywordHandler {
    async fn handle_request(&self, request: McpRequest) -> McpResponse {
        debug!(method = %request.method, "Handling MCP request");

        match McpMethod::parse(request.method_name(), request.params.clone()) {
            McpMethod::Initialize => {
                McpResponse::success(request.id, json!(InitializeResult::default()))
            }
            McpMethod::ListTools => {
                let tools = get_tool_definitions();
                McpResponse::success(request.id, json!({"tools": tools}))
            }
            McpMethod::CallTool { name, arguments } => match KeywordTool::from_name(&name) {
                Some(tool) => {
                    let result = self.call_tool(tool, &arguments).await;
                    McpResponse::success(request.id, json!(result))
                }
                // Unknown tools share the unknown-method reply.
                None => McpResponse::method_not_found(request.id),
            },
            McpMethod::Unknown(method) => {
                debug!(method = %method, "Unknown MCP method");
                McpResponse::method_not_found(request.id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{KeywordError, Result};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Keyword source returning a canned payload and counting calls
    struct StubSource {
        payload: std::result::Result<Value, u16>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok(payload: Value) -> Arc<Self> {
            Arc::new(Self {
                payload: Ok(payload),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                payload: Err(status),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl KeywordSource for StubSource {
        async fn fetch_related(&self, _keyword: &str) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.payload {
                Ok(v) => Ok(v.clone()),
                Err(status) => Err(KeywordError::Upstream {
                    status: *status,
                    body: "denied".into(),
                }),
            }
        }
    }

    fn request(value: Value) -> McpRequest {
        serde_json::from_value(value).unwrap()
    }

    fn text_of(response: &McpResponse) -> String {
        response.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn sample_payload() -> Value {
        json!({"keywordList": [
            {"relKeyword": "창업지원금", "monthlyPcQcCnt": "1200", "monthlyMobileQcCnt": "3400", "compIdx": "높음"},
            {"relKeyword": "청년창업", "monthlyPcQcCnt": "< 10", "monthlyMobileQcCnt": 40, "compIdx": "낮음"}
        ]})
    }

    #[tokio::test]
    async fn test_initialize() {
        let handler = KeywordHandler::new(StubSource::ok(json!({})));
        let response = handler
            .handle_request(request(json!({"jsonrpc": "2.0", "id": 7, "method": "initialize"})))
            .await;
        assert_eq!(response.id, json!(7));
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "naver-keyword-mcp");
    }

    #[tokio::test]
    async fn test_tools_list() {
        let handler = KeywordHandler::new(StubSource::ok(json!({})));
        let response = handler
            .handle_request(request(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"})))
            .await;
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "get_naver_keywords");
        assert!(tools[0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn test_call_without_keyword_prompts() {
        let source = StubSource::ok(sample_payload());
        let handler = KeywordHandler::new(source.clone());
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 2, "method": "tools/call",
                "params": {"name": "get_naver_keywords", "arguments": {}}
            })))
            .await;
        assert!(response.error.is_none());
        assert_eq!(text_of(&response), "키워드를 입력해주세요.");
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_call_renders_table() {
        let handler = KeywordHandler::new(StubSource::ok(sample_payload()));
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": "call-1", "method": "tools/call",
                "params": {"name": "get_naver_keywords", "arguments": {"keyword": "창업", "top_n": 1}}
            })))
            .await;
        assert_eq!(response.id, json!("call-1"));
        assert_eq!(
            text_of(&response),
            "🔍 '창업' 연관 키워드 분석 결과\n총 2개 키워드 중 상위 1개\n\n순위 | 키워드 | 월간검색량 | 경쟁강도\n---|---|---|---\n1 | 창업지원금 | 4,600 | 높음"
        );
    }

    #[tokio::test]
    async fn test_call_upstream_error_renders_message() {
        let handler = KeywordHandler::new(StubSource::failing(401));
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                "params": {"name": "get_naver_keywords", "arguments": {"keyword": "창업"}}
            })))
            .await;
        assert!(response.error.is_none());
        assert_eq!(text_of(&response), "오류: API 오류: 401");
    }

    #[tokio::test]
    async fn test_call_missing_keyword_list() {
        let handler = KeywordHandler::new(StubSource::ok(json!({"unexpected": true})));
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": {"name": "get_naver_keywords", "arguments": {"keyword": "창업"}}
            })))
            .await;
        assert_eq!(text_of(&response), "오류: 키워드 데이터 없음");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_method_not_found() {
        let source = StubSource::ok(sample_payload());
        let handler = KeywordHandler::new(source.clone());
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": {"name": "other_tool", "arguments": {"keyword": "창업"}}
            })))
            .await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"jsonrpc": "2.0", "id": 5, "error": {"code": -32601, "message": "Method not found"}})
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let handler = KeywordHandler::new(StubSource::ok(json!({})));
        let response = handler
            .handle_request(request(json!({"jsonrpc": "2.0", "id": 6, "method": "foo"})))
            .await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"jsonrpc": "2.0", "id": 6, "error": {"code": -32601, "message": "Method not found"}})
        );
    }

    #[tokio::test]
    async fn test_non_string_method_is_method_not_found() {
        let handler = KeywordHandler::new(StubSource::ok(json!({})));
        let request = McpRequest::parse(br#"{"jsonrpc":"2.0","id":3,"method":42}"#).unwrap();
        let response = handler.handle_request(request).await;
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"jsonrpc": "2.0", "id": 3, "error": {"code": -32601, "message": "Method not found"}})
        );
    }

    #[tokio::test]
    async fn test_numeric_jsonrpc_version_still_served() {
        let handler = KeywordHandler::new(StubSource::ok(json!({})));
        let request = McpRequest::parse(br#"{"jsonrpc":2,"id":4,"method":"tools/list"}"#).unwrap();
        let response = handler.handle_request(request).await;
        assert!(response.error.is_none());
        assert_eq!(response.id, json!(4));
        assert_eq!(response.result.unwrap()["tools"][0]["name"], "get_naver_keywords");
    }

    #[tokio::test]
    async fn test_null_top_n_returns_full_list() {
        let handler = KeywordHandler::new(StubSource::ok(sample_payload()));
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 8, "method": "tools/call",
                "params": {"name": "get_naver_keywords", "arguments": {"keyword": "창업", "top_n": null}}
            })))
            .await;
        let text = text_of(&response);
        assert!(text.contains("총 2개 키워드 중 상위 2개"));
        assert!(text.ends_with("2 | 청년창업 | 40 | 낮음"));
    }

    #[tokio::test]
    async fn test_numeric_keyword_is_looked_up() {
        let source = StubSource::ok(sample_payload());
        let handler = KeywordHandler::new(source.clone());
        let response = handler
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 9, "method": "tools/call",
                "params": {"name": "get_naver_keywords", "arguments": {"keyword": 2024}}
            })))
            .await;
        assert!(text_of(&response).starts_with("🔍 '2024' 연관 키워드 분석 결과"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absent_id_echoed_as_null() {
        let handler = KeywordHandler::new(StubSource::ok(json!({})));
        let response = handler
            .handle_request(request(json!({"jsonrpc": "2.0", "method": "foo"})))
            .await;
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("id"));
    }

    #[tokio::test]
    async fn test_lookup_passes_fetch_error_through() {
        let handler = KeywordHandler::new(StubSource::failing(500));
        let outcome = handler.lookup("창업", 15).await;
        assert_eq!(
            outcome,
            Err(json!({"error": "API 오류: 500", "detail": "denied"}))
        );
    }
}
