//! Error types for the keyword server

use thiserror::Error;

use crate::types::ErrorResult;

/// Result type alias for keyword server operations
pub type Result<T> = std::result::Result<T, KeywordError>;

/// Main error type for the keyword server
#[derive(Error, Debug)]
pub enum KeywordError {
    /// The Search Ad API answered with something other than 200
    #[error("API 오류: {status}")]
    Upstream { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KeywordError {
    /// Render the `{error, detail}` body handed to the formatter and REST callers
    pub fn to_error_result(&self) -> ErrorResult {
        match self {
            KeywordError::Upstream { body, .. } => ErrorResult::with_detail(self.to_string(), body),
            KeywordError::Http(e) => ErrorResult::with_detail("API 연결 실패", e.to_string()),
            KeywordError::Serialization(e) => {
                ErrorResult::with_detail("API 응답 파싱 실패", e.to_string())
            }
            other => ErrorResult::new(other.to_string()),
        }
    }
}
