//! Binary runner utilities
//!
//! Headless binaries implement [`BinaryRunner::tick`]; the provided
//! [`BinaryRunner::execute`] drives it on a fixed interval, logs a heartbeat
//! and stops on Ctrl+C.

use std::time::Duration;

use tracing::{info, warn};

/// Loop timing for a headless binary
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name used in log banners
    pub name: String,
    /// Seconds between heartbeat lines
    pub heartbeat_interval_secs: u64,
    /// Delay between ticks
    pub tick_interval: Duration,
}

impl RunConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            heartbeat_interval_secs: 60,
            tick_interval: Duration::from_millis(100),
        }
    }

    pub fn with_heartbeat(mut self, secs: u64) -> Self {
        self.heartbeat_interval_secs = secs;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Heartbeat period; zero disables the heartbeat
    pub fn heartbeat_interval(&self) -> Option<Duration> {
        (self.heartbeat_interval_secs > 0).then(|| Duration::from_secs(self.heartbeat_interval_secs))
    }
}

/// A headless binary driven by a periodic tick
pub trait BinaryRunner {
    fn config(&self) -> &RunConfig;

    /// One unit of work. An error ends the run.
    async fn tick(&mut self) -> anyhow::Result<()>;

    /// Release resources once the loop has stopped
    async fn shutdown(&mut self) {}

    /// Status line logged every heartbeat interval
    fn heartbeat(&self) -> Option<String> {
        None
    }

    /// Summary logged on shutdown
    fn stats(&self) -> Option<String> {
        None
    }

    /// Tick until Ctrl+C or a failed tick, then shut down
    async fn execute(&mut self) -> anyhow::Result<()> {
        let name = self.config().name.clone();
        let mut ticks = tokio::time::interval(self.config().tick_interval);
        let mut heartbeat = self.config().heartbeat_interval().map(|period| {
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            interval
        });

        info!("========================================");
        info!("{} started (Ctrl+C to stop)", name);
        info!("========================================");

        let result = loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("[{}] Ctrl+C received", name);
                    break Ok(());
                }
                _ = ticks.tick() => {
                    if let Err(e) = self.tick().await {
                        warn!("[{}] Stopping after failed tick: {}", name, e);
                        break Err(e);
                    }
                }
                _ = next_heartbeat(heartbeat.as_mut()) => {
                    if let Some(line) = self.heartbeat() {
                        info!("[{}] Heartbeat: {}", name, line);
                    }
                }
            }
        };

        self.shutdown().await;

        info!("========================================");
        info!("{} stopped", name);
        if let Some(stats) = self.stats() {
            info!("{}", stats);
        }
        info!("========================================");

        result
    }
}

async fn next_heartbeat(interval: Option<&mut tokio::time::Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
