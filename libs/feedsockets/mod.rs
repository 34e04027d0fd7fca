//! # FeedSockets
//!
//! A small, single-connection WebSocket client for read-only market feeds.
//!
//! ## Features
//!
//! - **Type-state builder**: URL and parser must be set before `build()` compiles
//! - **Ordered delivery**: frames are parsed one at a time on the I/O task and
//!   forwarded in arrival order over an unbounded crossbeam channel
//! - **Fail-soft parsing**: a frame that fails to parse is reported as an event,
//!   the connection stays open
//! - **No hidden retries**: a transport failure ends the client in `Error`;
//!   reconnect policy belongs to the caller

pub mod traits;
pub mod core;

// Re-export all traits
pub use traits::*;

// Re-export core client functionality
pub use self::core::{
    builder, client, config, connection_state,
    builder::{states, WebSocketClientBuilder},
    client::{ClientEvent, Metrics, WebSocketClient},
    config::ClientConfig,
    connection_state::{AtomicConnectionState, AtomicMetrics, ConnectionState},
};

/// Type alias for Result with FeedSocketError
pub type Result<T> = std::result::Result<T, traits::FeedSocketError>;
