//! Markdown report returned as the tool's text content

use serde_json::Value;

use super::rank::FormatOutcome;
use crate::types::FormattedResult;

/// Group digits by thousands: `1234567` becomes `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a ranked result as a rank | keyword | volume | competition table
pub fn render_markdown(result: &FormattedResult) -> String {
    let mut lines = vec![
        format!("🔍 '{}' 연관 키워드 분석 결과", result.search_keyword),
        format!(
            "총 {}개 키워드 중 상위 {}개",
            result.total_results,
            result.top_keywords.len()
        ),
        String::new(),
        "순위 | 키워드 | 월간검색량 | 경쟁강도".to_string(),
        "---|---|---|---".to_string(),
    ];

    for (rank, kw) in result.top_keywords.iter().enumerate() {
        lines.push(format!(
            "{} | {} | {} | {}",
            rank + 1,
            kw.keyword,
            group_thousands(kw.monthly_searches),
            kw.competition
        ));
    }

    lines.join("\n")
}

/// Render a formatter error object as `오류: <message>`
pub fn render_error(error: &Value) -> String {
    let message = match error.get("error") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => error.to_string(),
    };
    format!("오류: {}", message)
}

/// Text content for either side of a formatter outcome
pub fn render_outcome(outcome: &FormatOutcome) -> String {
    match outcome {
        Ok(result) => render_markdown(result),
        Err(error) => render_error(error),
    }
}
