//! Router construction and the serve loop

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use super::{routes, sse};
use crate::config::ServerConfig;
use crate::error::Result;
use crate::mcp::KeywordHandler;
use crate::naver::{KeywordSource, NaverAdsClient};

/// Shared, read-only state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub handler: KeywordHandler,
    pub keepalive: Duration,
    /// Cancelled on shutdown so open event streams end
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(source: Arc<dyn KeywordSource>, keepalive: Duration) -> Self {
        Self {
            handler: KeywordHandler::new(source),
            keepalive,
            shutdown: CancellationToken::new(),
        }
    }
}

/// HTTP server for the MCP endpoint and the REST shortcut
pub struct KeywordServer {
    state: AppState,
    addr: SocketAddr,
}

impl KeywordServer {
    /// Create a server talking to the Search Ad API described by `config`
    pub fn new(config: &ServerConfig) -> Result<Self> {
        config.validate()?;
        let client = NaverAdsClient::new(config.base_url.clone(), config.credentials.clone());
        let state = AppState::new(Arc::new(client), config.keepalive);
        Ok(Self {
            state,
            addr: config.bind_addr()?,
        })
    }

    /// Token that stops the server and its event streams when cancelled
    pub fn shutdown_token(&self) -> CancellationToken {
        self.state.shutdown.clone()
    }

    /// Build the router
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(routes::root_handler))
            .route("/health", get(routes::health_handler))
            .route(
                "/mcp",
                get(sse::mcp_events_handler).post(routes::mcp_post_handler),
            )
            .route("/api/keywords/:keyword", get(routes::keywords_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the server; returns once the shutdown token is cancelled
    pub async fn start(self) -> Result<()> {
        let shutdown = self.state.shutdown.clone();
        let app = Self::router(self.state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("Keyword MCP server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("Keyword MCP server stopped");
        Ok(())
    }
}
