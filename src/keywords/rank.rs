//! Ranking of the upstream `keywordList`
//!
//! Search counts arrive as integers, digit strings, or the `"< 10"` sentinel.
//! Each record is normalized, the list is stably sorted by combined PC and
//! mobile volume, and the head of the list is kept.

use serde_json::Value;

use crate::types::{ErrorResult, FormattedResult, RankedKeyword, RawKeywordRecord};

/// Count the API reports for volumes below its reporting threshold
pub const SENTINEL_BELOW_TEN: &str = "< 10";

/// Error message when the upstream body has no `keywordList`
pub const NO_KEYWORD_DATA: &str = "키워드 데이터 없음";

/// Ranked result, or the JSON error object to hand back verbatim
pub type FormatOutcome = std::result::Result<FormattedResult, Value>;

/// Normalize one search-count field to a non-negative integer
///
/// Digit-only strings parse to their value (saturating at `u64::MAX`), JSON
/// integers are taken as-is, and everything else (the sentinel, negatives,
/// floats, garbage, missing) counts as zero.
pub fn normalize_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => parse_digits(s),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

fn parse_digits(s: &str) -> u64 {
    if s == SENTINEL_BELOW_TEN || s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    s.parse().unwrap_or(u64::MAX)
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn rank_record(record: RawKeywordRecord<'_>) -> RankedKeyword {
    let pc = normalize_count(record.monthly_pc_qc_cnt);
    let mobile = normalize_count(record.monthly_mobile_qc_cnt);
    RankedKeyword {
        keyword: text_field(record.rel_keyword),
        monthly_searches: pc.saturating_add(mobile),
        pc_searches: pc,
        mobile_searches: mobile,
        competition: text_field(record.comp_idx),
    }
}

/// Rank the raw upstream payload for `keyword`, keeping at most `top_n` entries
///
/// A payload that already carries an `error` field is returned unchanged.
pub fn format_keywords(raw: &Value, keyword: &str, top_n: i64) -> FormatOutcome {
    if raw.get("error").is_some() {
        return Err(raw.clone());
    }

    let Some(records) = raw.get("keywordList").and_then(Value::as_array) else {
        return Err(ErrorResult::new(NO_KEYWORD_DATA).to_value());
    };

    let mut ranked: Vec<RankedKeyword> = records
        .iter()
        .map(|r| rank_record(RawKeywordRecord::from_value(r)))
        .collect();

    // sort_by is stable: equal volumes keep the API's order.
    ranked.sort_by(|a, b| b.monthly_searches.cmp(&a.monthly_searches));
    ranked.truncate(usize::try_from(top_n.max(0)).unwrap_or(usize::MAX));

    Ok(FormattedResult {
        search_keyword: keyword.to_string(),
        total_results: records.len(),
        top_keywords: ranked,
    })
}
