//! Quote records as delivered by the feed, and the ladder rows built from them

use serde::{Deserialize, Serialize};

// =============================================================================
// QuoteRecord - Wire-level quote
// =============================================================================

/// One book-level quote from the feed
///
/// Example JSON (the `type` tag is consumed by the decoder):
/// ```json
/// {
///     "type": "marketData",
///     "symbolLevel": "AAPL-1",
///     "level": 1,
///     "bid": 100,
///     "bidQuantity": 500,
///     "offer": 101,
///     "offerQuantity": 400
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Row identity: symbol and depth level
    pub symbol_level: String,
    pub level: i64,
    pub bid: f64,
    pub bid_quantity: f64,
    pub offer: f64,
    pub offer_quantity: f64,
}

// =============================================================================
// Row - Presentation-level ladder entry
// =============================================================================

/// A ladder row. At most one exists per `symbol_level`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub symbol_level: String,
    pub level: i64,
    pub bid: f64,
    pub bid_quantity: f64,
    pub offer: f64,
    pub offer_quantity: f64,
}

impl Row {
    /// Overwrite every value field with the record's, keeping identity
    pub fn apply(&mut self, record: QuoteRecord) {
        debug_assert_eq!(self.symbol_level, record.symbol_level);
        self.level = record.level;
        self.bid = record.bid;
        self.bid_quantity = record.bid_quantity;
        self.offer = record.offer;
        self.offer_quantity = record.offer_quantity;
    }

    /// Spread between offer and bid
    #[inline]
    pub fn spread(&self) -> f64 {
        self.offer - self.bid
    }
}

impl From<QuoteRecord> for Row {
    fn from(record: QuoteRecord) -> Self {
        Self {
            symbol_level: record.symbol_level,
            level: record.level,
            bid: record.bid,
            bid_quantity: record.bid_quantity,
            offer: record.offer,
            offer_quantity: record.offer_quantity,
        }
    }
}
