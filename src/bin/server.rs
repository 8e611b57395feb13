//! Naver keyword MCP server
//!
//! Run with: naver-keyword-server

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use naver_keyword::config::{Credentials, ServerConfig, DEFAULT_BASE_URL};
use naver_keyword::http::KeywordServer;

#[derive(Parser, Debug)]
#[command(name = "naver-keyword-server")]
#[command(about = "MCP server for Naver Search Ad related keywords")]
struct Args {
    /// Search Ad customer ID (X-CUSTOMER)
    #[arg(long, env = "NAVER_CUSTOMER_ID", default_value = "")]
    customer_id: String,

    /// Search Ad API key (X-API-KEY)
    #[arg(long, env = "NAVER_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Search Ad secret key used for request signing
    #[arg(long, env = "NAVER_SECRET_KEY", default_value = "", hide_env_values = true)]
    secret_key: String,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Search Ad API base URL
    #[arg(long, env = "NAVER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Seconds between SSE keep-alive comments
    #[arg(long, env = "MCP_KEEPALIVE_SECS", default_value = "30")]
    keepalive_secs: u64,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            base_url: self.base_url,
            keepalive: Duration::from_secs(self.keepalive_secs.max(1)),
            credentials: Credentials::new(self.customer_id, self.api_key, self.secret_key),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Args::parse().into_config();

    let missing = config.credentials.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(
            "Missing Naver credentials: {}; keyword lookups will be rejected upstream",
            missing.join(", ")
        );
    }

    let server = KeywordServer::new(&config).context("invalid server configuration")?;

    let shutdown = server.shutdown_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
        }
        shutdown.cancel();
    });

    tracing::info!("Naver keyword MCP server v{} starting...", naver_keyword::VERSION);
    server
        .start()
        .await
        .with_context(|| format!("server on {}:{} failed", config.host, config.port))?;

    Ok(())
}
