//! Naver keyword MCP server
//!
//! Exposes Naver Search Ad related-keyword lookups as an MCP tool over
//! JSON-RPC, plus a plain REST shortcut.

pub mod config;
pub mod error;
pub mod http;
pub mod keywords;
pub mod mcp;
pub mod naver;
pub mod types;

pub use config::{Credentials, ServerConfig};
pub use error::{KeywordError, Result};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
