use thiserror::Error;

/// Main error type for feedsockets
#[derive(Error, Debug)]
pub enum FeedSocketError {
    /// WebSocket transport error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Connection closed by the remote side
    #[error("Connection closed: {0}")]
    ConnectionClosed(String),

    /// Frame could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Operation timed out
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for feedsockets operations
pub type Result<T> = std::result::Result<T, FeedSocketError>;
