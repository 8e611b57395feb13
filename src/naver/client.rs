//! Related-keyword fetcher for the Search Ad `keywordstool` endpoint

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::signer::Signer;
use crate::config::Credentials;
use crate::error::{KeywordError, Result};

/// Path of the related-keyword endpoint, also the signed path
pub const KEYWORDS_TOOL_PATH: &str = "/keywordstool";

/// Anything that can produce the raw related-keyword payload for a hint keyword
#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// Fetch the raw JSON body for `keyword`
    async fn fetch_related(&self, keyword: &str) -> Result<Value>;
}

/// Search Ad API client
pub struct NaverAdsClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    signer: Signer,
}

impl NaverAdsClient {
    /// Create a new client against `base_url` (e.g. `https://api.naver.com`)
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let signer = Signer::new(credentials.secret_key.clone());
        Self {
            client,
            base_url,
            credentials,
            signer,
        }
    }

    /// Full URL of the related-keyword endpoint
    pub fn keywords_url(&self) -> String {
        format!("{}{}", self.base_url, KEYWORDS_TOOL_PATH)
    }

    /// Fetch related keywords, signing with the given millisecond timestamp
    pub async fn fetch_related_at(&self, keyword: &str, timestamp: i64) -> Result<Value> {
        let signature = self.signer.sign(timestamp, "GET", KEYWORDS_TOOL_PATH);
        trace!(timestamp, signature = %signature, "Signed keywordstool request");

        let response = self
            .client
            .get(self.keywords_url())
            .query(&[("hintKeywords", keyword), ("showDetail", "1")])
            .header("X-API-KEY", &self.credentials.api_key)
            .header("X-CUSTOMER", &self.credentials.customer_id)
            .header("X-Timestamp", timestamp.to_string())
            .header("X-Signature", signature)
            .send()
            .await
            .map_err(|e| {
                warn!("keywordstool request failed: {}", e);
                KeywordError::Http(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            warn!(status = status.as_u16(), "keywordstool returned an error");
            return Err(KeywordError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        debug!(keyword, bytes = body.len(), "keywordstool responded");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl KeywordSource for NaverAdsClient {
    async fn fetch_related(&self, keyword: &str) -> Result<Value> {
        self.fetch_related_at(keyword, Utc::now().timestamp_millis())
            .await
    }
}
