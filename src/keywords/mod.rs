//! Keyword ranking and report rendering

pub mod rank;
pub mod report;

pub use rank::{format_keywords, normalize_count, FormatOutcome, NO_KEYWORD_DATA, SENTINEL_BELOW_TEN};
pub use report::{group_thousands, render_error, render_markdown, render_outcome};
