//! Live quote feed: wire types, frame decoding and the connection that
//! forwards decoded quotes into the ladder rows.

pub mod connection;
pub mod parser;
pub mod types;

pub use connection::{FeedConnection, FeedStatus, PollSummary};
pub use parser::FeedParser;
pub use types::{decode_frame, DecodeError, FeedMessage, MARKET_DATA_TAG};
