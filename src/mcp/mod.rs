//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC over HTTP POST exposing the related-keyword tool.

pub mod handler;
pub mod protocol;
pub mod tools;

pub use handler::{KeywordHandler, EMPTY_KEYWORD_PROMPT};
pub use protocol::{
    methods, InitializeResult, McpHandler, McpMethod, McpRequest, McpResponse, ToolCallResult,
};
pub use tools::{get_tool_definitions, KeywordTool, GET_NAVER_KEYWORDS, TOOL_DEFINITIONS};
