//! Core types for the keyword server

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of ranked keywords returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: i64 = 15;

/// Structured failure body shared by the fetcher, the formatter and the REST route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }

    /// Convert into the JSON object the formatter consumes
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"error": self.error}))
    }
}

/// Read-only view over one entry of the upstream `keywordList`
///
/// Fields stay as raw JSON because the API mixes numbers, digit strings and
/// the `"< 10"` sentinel in the count columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawKeywordRecord<'a> {
    pub rel_keyword: Option<&'a Value>,
    pub monthly_pc_qc_cnt: Option<&'a Value>,
    pub monthly_mobile_qc_cnt: Option<&'a Value>,
    pub comp_idx: Option<&'a Value>,
}

impl<'a> RawKeywordRecord<'a> {
    /// Borrow the known fields out of a record; non-objects yield an empty view
    pub fn from_value(value: &'a Value) -> Self {
        Self {
            rel_keyword: value.get("relKeyword"),
            monthly_pc_qc_cnt: value.get("monthlyPcQcCnt"),
            monthly_mobile_qc_cnt: value.get("monthlyMobileQcCnt"),
            comp_idx: value.get("compIdx"),
        }
    }
}

/// A keyword after normalization and ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeyword {
    pub keyword: String,
    /// PC plus mobile searches
    pub monthly_searches: u64,
    pub pc_searches: u64,
    pub mobile_searches: u64,
    pub competition: String,
}

/// Ranked lookup result for one search keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub search_keyword: String,
    /// Size of the upstream list before truncation
    pub total_results: usize,
    pub top_keywords: Vec<RankedKeyword>,
}
