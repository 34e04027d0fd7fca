//! Depth Ladder Visualizer
//!
//! Terminal UI for the live ladder. Feed events are drained on the UI thread
//! and every render pass commits its baselines only after the frame is drawn.

pub mod app;
pub mod state;
pub mod ui;

pub use app::App;
pub use state::PanelMode;
