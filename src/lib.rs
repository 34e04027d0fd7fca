//! Market Depth Ladder - Main Library
//!
//! Re-exports the workspace libraries and hosts the helpers shared by the
//! binaries.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI, runners)
//! - **market_depth**: ladder core, feed connection and visualizer (re-exported from workspace)
//! - **feedsockets**: WebSocket client library (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use market_depth_ladder::bin_common::{load_config_from_env, ConfigType};
//! use market_depth_ladder::market_depth::LadderConfig;
//! ```

// Re-export workspace libraries for convenience
pub use feedsockets;
pub use market_depth;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;
    pub mod runner;

    pub use cli::{has_flag, load_config_from_env, parse_args, ConfigType};
    pub use runner::{BinaryRunner, RunConfig};
}
