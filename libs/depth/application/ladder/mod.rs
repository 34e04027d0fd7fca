//! Ladder core
//!
//! Rows keyed by `symbolLevel`, the change tracker holding the last rendered
//! baseline per row, the pure presenter, and the two-phase render pass that
//! ties them together (read every diff, render, then commit every baseline).

pub mod pass;
pub mod presenter;
pub mod rows;
pub mod text;
pub mod tracker;

pub use pass::{prepare_pass, LadderFrame, LadderView, PendingCommit};
pub use presenter::{format_value, PresenterSettings, RowDisplay, RowPresenter};
pub use rows::RowCollection;
pub use text::render_plain;
pub use tracker::{percent_change, ChangeTracker, RowChange, SideChange};
