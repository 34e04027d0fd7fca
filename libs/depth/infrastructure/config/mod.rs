use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Environment variable that overrides `ws_url`
pub const WS_URL_ENV: &str = "LADDER_WS_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Depth ladder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Feed socket endpoint
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// How often the UI drains the feed and redraws
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file for the terminal UI (it never logs to stdout)
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Ladder presentation knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows above this index get colored direction cues
    #[serde(default = "default_highlight_rows")]
    pub highlight_rows: usize,
    /// Multiplier applied to percent change when sizing bars
    #[serde(default = "default_bar_amplification")]
    pub bar_amplification: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_rows: default_highlight_rows(),
            bar_amplification: default_bar_amplification(),
        }
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            refresh_interval_ms: default_refresh_interval_ms(),
            log_level: default_log_level(),
            log_file: None,
            display: DisplayConfig::default(),
        }
    }
}

impl LadderConfig {
    /// Load configuration from a YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: LadderConfig = serde_yaml::from_str(&yaml_content)?;
        config.finish()
    }

    /// Load from YAML if the file exists, otherwise start from defaults
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!("Config file {} not found, using defaults", path.display());
            Self::default().finish()
        }
    }

    fn finish(mut self) -> Result<Self> {
        // Override feed URL from environment if present
        if let Ok(url) = std::env::var(WS_URL_ENV) {
            if !url.trim().is_empty() {
                info!("Overriding feed URL from {}", WS_URL_ENV);
                self.ws_url = url.trim().to_string();
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.ws_url.starts_with("ws://") || self.ws_url.starts_with("wss://")) {
            return Err(ConfigError::ValidationError(format!(
                "ws_url must start with ws:// or wss://, got '{}'",
                self.ws_url
            )));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "refresh_interval_ms must be greater than 0".to_string(),
            ));
        }

        let amplification = self.display.bar_amplification;
        if !amplification.is_finite() || amplification <= 0.0 {
            return Err(ConfigError::ValidationError(
                "display.bar_amplification must be a positive number".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Feed URL: {}", self.ws_url);
        info!("  Connect timeout: {}s", self.connect_timeout_secs);
        info!("  Refresh interval: {}ms", self.refresh_interval_ms);
        info!("  Highlighted rows: {}", self.display.highlight_rows);
        info!("  Bar amplification: {}", self.display.bar_amplification);
        info!("  Log level: {}", self.log_level);
    }
}

fn default_ws_url() -> String {
    "ws://localhost:8090/websocket".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_refresh_interval_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_highlight_rows() -> usize {
    10
}

fn default_bar_amplification() -> f64 {
    35.0
}
