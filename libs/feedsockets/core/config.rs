use crate::traits::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Default time allowed for the opening handshake
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`WebSocketClient`](crate::WebSocketClient)
///
/// Built through [`WebSocketClientBuilder`](crate::WebSocketClientBuilder).
pub struct ClientConfig<P>
where
    P: MessageParser,
{
    /// WebSocket URL (ws:// or wss://)
    pub(crate) url: String,

    /// Frame parser, shared with the I/O task
    pub(crate) parser: Arc<P>,

    /// Maximum time for the opening handshake
    pub(crate) connect_timeout: Duration,

    /// Shutdown flag - true while the client should keep running
    pub(crate) shutdown_flag: Arc<AtomicBool>,
}

impl<P> ClientConfig<P>
where
    P: MessageParser,
{
    pub(crate) fn new(
        url: String,
        parser: P,
        connect_timeout: Duration,
        shutdown_flag: Arc<AtomicBool>,
    ) -> Self {
        Self {
            url,
            parser: Arc::new(parser),
            connect_timeout,
            shutdown_flag,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}
