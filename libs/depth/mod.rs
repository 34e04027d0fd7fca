//! Market Depth Ladder
//!
//! Live bid/offer ladder fed by a WebSocket quote stream, with per-row change
//! detection and direction/magnitude cues.
//!
//! - **domain**: quote records, rows, direction and colour tiers, schema descriptor
//! - **infrastructure**: configuration, logging, feed decoding and connection
//! - **application**: the ladder core (rows, change tracker, presenter, render
//!   pass) and the terminal visualizer

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used items
pub use application::ladder::{
    prepare_pass, render_plain, ChangeTracker, LadderFrame, LadderView, PendingCommit,
    PresenterSettings, RowChange, RowCollection, RowDisplay, RowPresenter, SideChange,
};
pub use domain::{
    CellDisplay, ColorTier, DisplayAttributes, Direction, QuoteRecord, Row, TableSchema,
};
pub use infrastructure::config::{ConfigError, DisplayConfig, LadderConfig};
pub use infrastructure::feed::{
    decode_frame, DecodeError, FeedConnection, FeedMessage, FeedParser, FeedStatus, PollSummary,
};
pub use infrastructure::logging::{init_file_tracing, init_tracing};
