//! Depth Tail - headless ladder
//!
//! Connects to the quote feed and prints the ladder as plain text after
//! every render pass. `--schema` prints the table schema as JSON and exits.

use anyhow::Result;
use tracing::{info, warn};

use market_depth::{
    init_tracing, render_plain, FeedConnection, FeedStatus, LadderConfig, LadderView,
    PresenterSettings, RowPresenter, TableSchema,
};
use market_depth_ladder::bin_common::{
    has_flag, load_config_from_env, parse_args, BinaryRunner, ConfigType, RunConfig,
};

struct DepthTail {
    run_config: RunConfig,
    feed: FeedConnection,
    view: LadderView,
    last_status: FeedStatus,
    passes: u64,
}

impl DepthTail {
    async fn new(config: &LadderConfig) -> Result<Self> {
        let feed = FeedConnection::open(
            config.ws_url.clone(),
            TableSchema::market_depth(),
            config.connect_timeout(),
        )
        .await?;

        let presenter = RowPresenter::new(PresenterSettings::from(&config.display));
        let run_config =
            RunConfig::new("depth-tail").with_tick_interval(config.refresh_interval());

        Ok(Self {
            run_config,
            last_status: feed.status().clone(),
            feed,
            view: LadderView::new(presenter),
            passes: 0,
        })
    }

    fn report_status_change(&mut self) {
        if self.feed.status() == &self.last_status {
            return;
        }

        self.last_status = self.feed.status().clone();
        match self.last_status.error_message() {
            Some(message) => warn!("[Tail] Feed status: {} ({})", self.last_status, message),
            None => info!("[Tail] Feed status: {}", self.last_status),
        }
    }
}

impl BinaryRunner for DepthTail {
    fn config(&self) -> &RunConfig {
        &self.run_config
    }

    async fn tick(&mut self) -> Result<()> {
        let summary = self.feed.poll(self.view.rows_mut());
        if summary.decode_errors > 0 {
            if let Some(reason) = self.feed.last_decode_error() {
                warn!("[Tail] {}", reason);
            }
        }
        self.report_status_change();

        let drawn = self.view.render_pass(|frame| {
            println!("{}", render_plain(frame));
        });
        if drawn {
            self.passes += 1;
        }

        Ok(())
    }

    async fn shutdown(&mut self) {
        self.feed.close().await;
    }

    fn heartbeat(&self) -> Option<String> {
        Some(format!(
            "status={} rows={} passes={} decode_errors={}",
            self.feed.status(),
            self.view.rows().len(),
            self.passes,
            self.feed.decode_errors()
        ))
    }

    fn stats(&self) -> Option<String> {
        Some(format!(
            "Render passes: {} | Rows: {} | Decode errors: {}",
            self.passes,
            self.view.rows().len(),
            self.feed.decode_errors()
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let args = parse_args();
    if has_flag(&args, "--schema") {
        println!("{}", TableSchema::market_depth().to_json_pretty()?);
        return Ok(());
    }

    let config_path = load_config_from_env(ConfigType::Ladder);
    let config = LadderConfig::load_or_default(&config_path)?;

    init_tracing(&config.log_level);
    config.log();

    let mut tail = DepthTail::new(&config).await?;
    tail.execute().await
}
