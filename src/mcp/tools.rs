//! MCP tool definitions for the keyword server

use serde_json::{json, Value};

use super::protocol::ToolDefinition;
use crate::types::DEFAULT_TOP_N;

/// Name of the related-keyword tool
pub const GET_NAVER_KEYWORDS: &str = "get_naver_keywords";

/// All tool definitions: (name, description, JSON schema)
pub const TOOL_DEFINITIONS: &[(&str, &str, &str)] = &[(
    GET_NAVER_KEYWORDS,
    "네이버 검색광고 API를 사용하여 키워드의 연관 키워드와 월간 검색량을 조회합니다. 블로그 제목 최적화, SEO 키워드 분석에 활용할 수 있습니다.",
    r#"{
        "type": "object",
        "properties": {
            "keyword": {"type": "string", "description": "검색할 키워드 (예: 소상공인 대환대출, 청년창업지원금)"},
            "top_n": {"type": "integer", "description": "반환할 상위 키워드 개수 (기본값: 15)", "default": 15}
        },
        "required": ["keyword"]
    }"#,
)];

/// Get all tool definitions as ToolDefinition structs
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    TOOL_DEFINITIONS
        .iter()
        .map(|(name, description, schema)| ToolDefinition {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: serde_json::from_str(schema).unwrap_or(json!({})),
        })
        .collect()
}

/// Tools this server can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTool {
    GetNaverKeywords,
}

impl KeywordTool {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            GET_NAVER_KEYWORDS => Some(KeywordTool::GetNaverKeywords),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeywordTool::GetNaverKeywords => GET_NAVER_KEYWORDS,
        }
    }
}

/// Arguments of `get_naver_keywords`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordArgs {
    /// Empty when missing, null, or not a string or number
    pub keyword: String,
    pub top_n: i64,
}

impl KeywordArgs {
    /// Read the arguments leniently
    ///
    /// Numeric keywords are looked up by their decimal text. An explicit
    /// `"top_n": null` keeps the whole list; any other non-integer falls back
    /// to the default.
    pub fn from_arguments(arguments: &Value) -> Self {
        let keyword = match arguments.get("keyword") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let top_n = match arguments.get("top_n") {
            Some(Value::Null) => i64::MAX,
            Some(value) => value.as_i64().unwrap_or(DEFAULT_TOP_N),
            None => DEFAULT_TOP_N,
        };
        Self { keyword, top_n }
    }
}
