//! Process-wide configuration
//!
//! Built once by the server binary from flags/environment and handed to the
//! components that need it. Nothing in the library reads the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{KeywordError, Result};

/// Default Search Ad API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.naver.com";

/// Default interval between SSE keep-alive comments
pub const DEFAULT_KEEPALIVE: Duration = Duration::from_secs(30);

/// Naver Search Ad credentials
#[derive(Clone, Default)]
pub struct Credentials {
    /// Sent as `X-CUSTOMER`
    pub customer_id: String,
    /// Sent as `X-API-KEY`
    pub api_key: String,
    /// HMAC key, never sent over the wire
    pub secret_key: String,
}

impl Credentials {
    pub fn new(
        customer_id: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Names of the credentials that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("NAVER_CUSTOMER_ID", &self.customer_id),
            ("NAVER_API_KEY", &self.api_key),
            ("NAVER_SECRET_KEY", &self.secret_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

// Keep secrets out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_id", &self.customer_id)
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub keepalive: Duration,
    pub credentials: Credentials,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            base_url: DEFAULT_BASE_URL.to_string(),
            keepalive: DEFAULT_KEEPALIVE,
            credentials: Credentials::default(),
        }
    }
}

impl ServerConfig {
    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.keepalive.is_zero() {
            return Err(KeywordError::Config(
                "keep-alive interval must be non-zero".to_string(),
            ));
        }
        self.bind_addr().map(|_| ())
    }

    /// Resolve the listen address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| KeywordError::Config(format!("invalid listen address: {}", e)))
    }
}
