//! Naver Search Ad API access
//!
//! Request signing and the related-keyword fetcher.

pub mod client;
pub mod signer;

pub use client::{KeywordSource, NaverAdsClient, KEYWORDS_TOOL_PATH};
pub use signer::Signer;
