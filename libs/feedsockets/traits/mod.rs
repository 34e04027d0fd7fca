//! # FeedSockets Traits
//!
//! - **MessageParser**: turn a raw frame into a typed message
//! - **FeedSocketError**: error type shared by the client and parsers

pub mod error;
pub mod parser;

pub use error::{FeedSocketError, Result};
pub use parser::{MessageParser, WsMessage};
