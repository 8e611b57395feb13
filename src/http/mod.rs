//! HTTP surface: liveness, JSON-RPC, SSE and the REST shortcut

mod routes;
mod server;
mod sse;

pub use routes::KeywordQuery;
pub use server::{AppState, KeywordServer};
pub use sse::event_stream;
