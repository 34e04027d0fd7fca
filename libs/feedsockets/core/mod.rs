//! ## Example
//!
//! ```rust,ignore
//! use feedsockets::WebSocketClientBuilder;
//!
//! let client = WebSocketClientBuilder::new()
//!     .url("ws://localhost:8090/websocket")
//!     .parser(MyParser)
//!     .build()
//!     .await?;
//!
//! while let Some(event) = client.wait_event(Duration::from_secs(1)).await {
//!     println!("Event: {:?}", event);
//! }
//!
//! client.shutdown().await?;
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod connection_state;

// Re-export main types
pub use builder::{states, WebSocketClientBuilder};
pub use client::{ClientEvent, Metrics, WebSocketClient};
pub use config::ClientConfig;
pub use connection_state::{AtomicConnectionState, AtomicMetrics, ConnectionState};
