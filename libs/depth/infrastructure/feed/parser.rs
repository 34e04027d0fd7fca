//! Bridges the socket client to the feed decoder

use async_trait::async_trait;
use feedsockets::{FeedSocketError, MessageParser, WsMessage};

use super::types::{decode_frame, DecodeError, FeedMessage};

/// Parses raw socket frames into [`FeedMessage`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    /// Decode a frame of either kind; binary frames must carry UTF-8 JSON
    pub fn decode(&self, message: &WsMessage) -> Result<FeedMessage, DecodeError> {
        match message {
            WsMessage::Text(text) => decode_frame(text),
            WsMessage::Binary(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8)?;
                decode_frame(text)
            }
        }
    }
}

#[async_trait]
impl MessageParser for FeedParser {
    type Message = FeedMessage;

    async fn parse(&self, message: WsMessage) -> feedsockets::Result<FeedMessage> {
        self.decode(&message)
            .map_err(|e| FeedSocketError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_frames() {
        let parser = FeedParser::new();
        let json = br#"{"type":"status","ok":true}"#.to_vec();

        assert_eq!(
            parser.decode(&WsMessage::Binary(json)),
            Ok(FeedMessage::Other("status".to_string()))
        );
        assert_eq!(
            parser.decode(&WsMessage::Binary(vec![0xff, 0xfe])),
            Err(DecodeError::NotUtf8)
        );
    }

    #[tokio::test]
    async fn test_parse_maps_decode_errors() {
        let result = FeedParser.parse(WsMessage::Text("oops".into())).await;
        assert!(matches!(result, Err(FeedSocketError::ParseError(msg)) if msg.starts_with("invalid JSON")));
    }
}
