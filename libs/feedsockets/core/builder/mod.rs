pub mod states;

use crate::client::WebSocketClient;
use crate::config::{ClientConfig, DEFAULT_CONNECT_TIMEOUT};
use crate::traits::*;
use states::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Type-state builder for [`WebSocketClient`]
///
/// `U` tracks whether a URL was given, `S` whether a parser was given.
/// `P` is the parser type once known (`()` before).
pub struct WebSocketClientBuilder<U, S, P>
where
    U: UrlState,
    S: ParserState,
{
    _state: TypeState<U, S>,
    url: Option<String>,
    parser: Option<P>,
    connect_timeout: Duration,
    shutdown_flag: Option<Arc<AtomicBool>>,
}

impl WebSocketClientBuilder<NoUrl, NoParser, ()> {
    /// Create a new builder instance
    pub fn new() -> Self {
        Self {
            _state: TypeState::new(),
            url: None,
            parser: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            shutdown_flag: None,
        }
    }
}

impl Default for WebSocketClientBuilder<NoUrl, NoParser, ()> {
    fn default() -> Self {
        Self::new()
    }
}

// URL setting
impl<S, P> WebSocketClientBuilder<NoUrl, S, P>
where
    S: ParserState,
{
    pub fn url(self, url: impl Into<String>) -> WebSocketClientBuilder<HasUrl, S, P> {
        WebSocketClientBuilder {
            _state: TypeState::new(),
            url: Some(url.into()),
            parser: self.parser,
            connect_timeout: self.connect_timeout,
            shutdown_flag: self.shutdown_flag,
        }
    }
}

// Parser setting
impl<U> WebSocketClientBuilder<U, NoParser, ()>
where
    U: UrlState,
{
    pub fn parser<P>(self, parser: P) -> WebSocketClientBuilder<U, HasParser, P>
    where
        P: MessageParser,
    {
        WebSocketClientBuilder {
            _state: TypeState::new(),
            url: self.url,
            parser: Some(parser),
            connect_timeout: self.connect_timeout,
            shutdown_flag: self.shutdown_flag,
        }
    }
}

// Optional settings, available in any state
impl<U, S, P> WebSocketClientBuilder<U, S, P>
where
    U: UrlState,
    S: ParserState,
{
    /// Maximum time for the opening handshake (default 10s)
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Share an external shutdown flag (true = keep running).
    ///
    /// The client stores `false` into it on shutdown.
    pub fn shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }
}

impl<P> WebSocketClientBuilder<HasUrl, HasParser, P>
where
    P: MessageParser,
{
    /// Build the client and spawn its I/O task.
    ///
    /// Must be called from within a tokio runtime. Connection happens in the
    /// background; watch for [`ClientEvent::Connected`](crate::ClientEvent).
    pub async fn build(self) -> Result<WebSocketClient<P>> {
        let url = self
            .url
            .ok_or_else(|| FeedSocketError::Configuration("URL not set".into()))?;
        let parser = self
            .parser
            .ok_or_else(|| FeedSocketError::Configuration("Parser not set".into()))?;

        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            return Err(FeedSocketError::Configuration(format!(
                "URL must start with ws:// or wss://, got '{}'",
                url
            )));
        }

        if self.connect_timeout.is_zero() {
            return Err(FeedSocketError::Configuration(
                "connect timeout must be greater than zero".into(),
            ));
        }

        let shutdown_flag = self
            .shutdown_flag
            .unwrap_or_else(|| Arc::new(AtomicBool::new(true)));

        let config = ClientConfig::new(url, parser, self.connect_timeout, shutdown_flag);
        WebSocketClient::new(config).await
    }
}
