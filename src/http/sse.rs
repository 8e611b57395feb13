//! Server-sent event stream for MCP clients
//!
//! Sends one `initialized` notification, then a keep-alive comment on every
//! tick. The interval lives inside the response stream, so it is dropped as
//! soon as the client disconnects and hyper drops the body.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::{stream, Stream, StreamExt};
use serde_json::json;
use tokio_stream::wrappers::IntervalStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::server::AppState;
use crate::config::DEFAULT_KEEPALIVE;
use crate::mcp::methods;

/// Logs when the stream owning it is dropped
struct DisconnectGuard;

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        debug!("SSE stream closed");
    }
}

/// Build the event stream; ends early when `shutdown` is cancelled
///
/// A zero `keepalive` uses the default interval.
pub fn event_stream(
    keepalive: Duration,
    shutdown: CancellationToken,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let keepalive = if keepalive.is_zero() {
        DEFAULT_KEEPALIVE
    } else {
        keepalive
    };
    let initialized = json!({"jsonrpc": "2.0", "method": methods::INITIALIZED}).to_string();
    let guard = DisconnectGuard;

    // The first tick fires immediately, matching a keep-alive right after the notification.
    let ticks = IntervalStream::new(tokio::time::interval(keepalive)).map(move |_| {
        let _guard = &guard;
        Ok(Event::default().comment("keepalive"))
    });

    stream::once(async move { Ok(Event::default().data(initialized)) })
        .chain(ticks)
        .take_until(shutdown.cancelled_owned())
}

/// GET /mcp
pub(crate) async fn mcp_events_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("SSE client connected");
    Sse::new(event_stream(state.keepalive, state.shutdown.clone()))
}
