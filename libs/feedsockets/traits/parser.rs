use crate::traits::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// A data frame received from the socket.
/// Control frames (ping/pong/close) never reach parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WsMessage {
    Text(String),
    Binary(Vec<u8>),
}

impl WsMessage {
    /// Get the message as text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            WsMessage::Text(s) => Some(s),
            WsMessage::Binary(_) => None,
        }
    }

    /// Get the message as binary, if it is binary
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            WsMessage::Text(_) => None,
            WsMessage::Binary(b) => Some(b),
        }
    }
}

/// Parses raw frames into typed messages
///
/// Called on the client's I/O task for every data frame, strictly in arrival
/// order. Returning an error drops the frame and emits
/// [`ClientEvent::ParseError`](crate::ClientEvent::ParseError); the connection
/// stays open.
///
/// # Example
///
/// ```ignore
/// struct LineParser;
///
/// #[async_trait]
/// impl MessageParser for LineParser {
///     type Message = String;
///
///     async fn parse(&self, message: WsMessage) -> Result<String> {
///         message
///             .as_text()
///             .map(str::to_owned)
///             .ok_or_else(|| FeedSocketError::ParseError("binary frame".into()))
///     }
/// }
/// ```
#[async_trait]
pub trait MessageParser: Send + Sync + 'static {
    /// The parsed message type
    type Message: Send + Debug + 'static;

    /// Parse a single frame. Keep this fast, it is on the read path.
    async fn parse(&self, message: WsMessage) -> Result<Self::Message>;
}
