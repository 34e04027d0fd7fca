//! Infrastructure layer: configuration, logging and the live feed

pub mod config;
pub mod feed;
pub mod logging;

pub use config::{ConfigError, DisplayConfig, LadderConfig};
pub use feed::{FeedConnection, FeedStatus};
pub use logging::{init_file_tracing, init_tracing};
