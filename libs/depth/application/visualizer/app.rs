//! Main application state and logic for the visualizer

use anyhow::Result;
use tokio::runtime::Handle;
use tracing::{error, info};

use crate::application::ladder::{LadderView, PendingCommit, PresenterSettings, RowPresenter};
use crate::domain::TableSchema;
use crate::infrastructure::config::LadderConfig;
use crate::infrastructure::feed::{FeedConnection, FeedStatus};

use super::state::PanelMode;

/// Main application state
pub struct App {
    /// Live feed subscription
    pub feed: FeedConnection,
    /// Rows, baselines and the last drawn frame
    pub ladder: LadderView,
    /// Instructions or table
    pub panel: PanelMode,
    /// First visible table row
    pub scroll: usize,
    /// Whether to quit
    pub should_quit: bool,
    /// Status message to show in footer
    pub status_message: Option<String>,
    /// Tokio runtime handle
    runtime: Handle,
}

impl App {
    /// Open the feed and build an empty ladder
    pub async fn initialize(runtime: Handle, config: &LadderConfig) -> Result<Self> {
        info!("[Visualizer] Connecting to {}...", config.ws_url);
        let feed = FeedConnection::open(
            config.ws_url.clone(),
            TableSchema::market_depth(),
            config.connect_timeout(),
        )
        .await?;

        let presenter = RowPresenter::new(PresenterSettings::from(&config.display));

        Ok(Self {
            feed,
            ladder: LadderView::new(presenter),
            panel: PanelMode::default(),
            scroll: 0,
            should_quit: false,
            status_message: None,
            runtime,
        })
    }

    /// Drain pending feed events into the rows
    pub fn tick(&mut self) {
        let summary = self.feed.poll(self.ladder.rows_mut());

        if summary.decode_errors > 0 {
            self.status_message = self.feed.last_decode_error().map(str::to_string);
        }
        if let FeedStatus::Error(message) = self.feed.status() {
            self.status_message = Some(message.clone());
        }
    }

    /// Start a render pass when the table is visible and rows changed.
    /// Pass the result to [`App::finish_frame`] once the frame is drawn.
    pub fn begin_frame(&mut self) -> Option<PendingCommit> {
        if !self.panel.shows_table() {
            return None;
        }
        self.ladder.refresh()
    }

    pub fn finish_frame(&mut self, pending: Option<PendingCommit>) {
        if let Some(pending) = pending {
            self.ladder.commit(pending);
        }
    }

    pub fn toggle_panel(&mut self) {
        self.panel = self.panel.toggle();
    }

    pub fn scroll_down(&mut self) {
        let max = self.ladder.rows().len().saturating_sub(1);
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Manual reconnect. Rows and baselines are kept.
    pub fn reconnect(&mut self) {
        info!("[Visualizer] Reconnecting...");
        let runtime = self.runtime.clone();
        match runtime.block_on(self.feed.reconnect()) {
            Ok(()) => self.status_message = Some("Reconnecting...".to_string()),
            Err(e) => {
                error!("[Visualizer] Reconnect failed: {}", e);
                self.status_message = Some(format!("Reconnect failed: {}", e));
            }
        }
    }

    /// Release the feed socket
    pub fn shutdown(&mut self) {
        info!("[Visualizer] Shutting down...");
        let runtime = self.runtime.clone();
        runtime.block_on(self.feed.close());
    }
}
