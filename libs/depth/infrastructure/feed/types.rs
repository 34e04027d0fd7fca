//! Feed wire types
//!
//! Every frame is a JSON object with a `type` discriminant. Only
//! `"marketData"` is consumed here; other tags belong to other collaborators.

use serde_json::Value;
use thiserror::Error;

use crate::domain::QuoteRecord;

/// Discriminant of quote update messages
pub const MARKET_DATA_TAG: &str = "marketData";

/// Closed set of feed messages
#[derive(Debug, Clone, PartialEq)]
pub enum FeedMessage {
    /// Book-level quote update for one row
    MarketData(QuoteRecord),
    /// Well-formed message with a tag this core does not handle
    Other(String),
}

impl FeedMessage {
    /// The wire tag of this message
    pub fn tag(&self) -> &str {
        match self {
            FeedMessage::MarketData(_) => MARKET_DATA_TAG,
            FeedMessage::Other(tag) => tag,
        }
    }
}

/// Why a frame was rejected. Never fatal to the connection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("missing or non-string 'type' field")]
    MissingType,

    #[error("invalid marketData message: {0}")]
    InvalidQuote(String),

    #[error("binary frame is not UTF-8 text")]
    NotUtf8,
}

/// Decode one text frame
pub fn decode_frame(text: &str) -> Result<FeedMessage, DecodeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    let tag = match &value {
        Value::Object(map) => map
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingType)?
            .to_string(),
        _ => return Err(DecodeError::NotAnObject),
    };

    match tag.as_str() {
        MARKET_DATA_TAG => serde_json::from_value::<QuoteRecord>(value)
            .map(FeedMessage::MarketData)
            .map_err(|e| DecodeError::InvalidQuote(e.to_string())),
        _ => Ok(FeedMessage::Other(tag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"type":"marketData","symbolLevel":"AAPL-1","level":1,
        "bid":100,"bidQuantity":500,"offer":101,"offerQuantity":400}"#;

    #[test]
    fn test_decode_market_data() {
        let message = decode_frame(VALID).unwrap();
        assert_eq!(
            message,
            FeedMessage::MarketData(QuoteRecord {
                symbol_level: "AAPL-1".to_string(),
                level: 1,
                bid: 100.0,
                bid_quantity: 500.0,
                offer: 101.0,
                offer_quantity: 400.0,
            })
        );
        assert_eq!(message.tag(), "marketData");
    }

    #[test]
    fn test_fractional_prices_accepted() {
        let text = r#"{"type":"marketData","symbolLevel":"MSFT-2","level":2,
            "bid":99.75,"bidQuantity":10,"offer":100.25,"offerQuantity":12.5}"#;
        match decode_frame(text).unwrap() {
            FeedMessage::MarketData(q) => {
                assert_eq!(q.bid, 99.75);
                assert_eq!(q.offer_quantity, 12.5);
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_other_tags_pass_through() {
        let message = decode_frame(r#"{"type":"heartbeat","ts":1}"#).unwrap();
        assert_eq!(message, FeedMessage::Other("heartbeat".to_string()));
    }

    #[test]
    fn test_missing_field_rejected() {
        let text = r#"{"type":"marketData","symbolLevel":"AAPL-1","level":1,
            "bidQuantity":500,"offer":101,"offerQuantity":400}"#;
        assert!(matches!(decode_frame(text), Err(DecodeError::InvalidQuote(msg)) if msg.contains("bid")));
    }

    #[test]
    fn test_wrong_types_rejected() {
        let string_bid = r#"{"type":"marketData","symbolLevel":"AAPL-1","level":1,
            "bid":"100","bidQuantity":500,"offer":101,"offerQuantity":400}"#;
        assert!(matches!(decode_frame(string_bid), Err(DecodeError::InvalidQuote(_))));

        let fractional_level = r#"{"type":"marketData","symbolLevel":"AAPL-1","level":1.5,
            "bid":100,"bidQuantity":500,"offer":101,"offerQuantity":400}"#;
        assert!(matches!(decode_frame(fractional_level), Err(DecodeError::InvalidQuote(_))));
    }

    #[test]
    fn test_envelope_errors() {
        assert!(matches!(decode_frame("{not json"), Err(DecodeError::InvalidJson(_))));
        assert_eq!(decode_frame("[1,2,3]"), Err(DecodeError::NotAnObject));
        assert_eq!(decode_frame(r#"{"bid":1}"#), Err(DecodeError::MissingType));
        assert_eq!(decode_frame(r#"{"type":7}"#), Err(DecodeError::MissingType));
    }
}
