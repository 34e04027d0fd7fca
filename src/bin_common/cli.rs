//! CLI utilities for binaries
//!
//! Handles configuration path lookup and command line flags
//! for all binary executables.

use std::path::PathBuf;

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Ladder configuration (ladder_config.yaml)
    Ladder,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Ladder => "config/ladder_config.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type.
    /// Custom paths are taken as given.
    pub fn env_var_name(&self) -> Option<&str> {
        match self {
            ConfigType::Ladder => Some("LADDER_CONFIG_PATH"),
            ConfigType::Custom(_) => None,
        }
    }
}

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use market_depth_ladder::bin_common::{load_config_from_env, ConfigType};
///
/// let path = load_config_from_env(ConfigType::Ladder);
/// ```
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    config_type
        .env_var_name()
        .and_then(|name| std::env::var(name).ok())
        .unwrap_or_else(|| config_type.default_path().to_string())
        .into()
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Whether `flag` (e.g. `--schema`) was passed
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_type_paths() {
        assert_eq!(ConfigType::Ladder.default_path(), "config/ladder_config.yaml");

        let custom = ConfigType::Custom("custom/path.yaml".to_string());
        assert_eq!(custom.default_path(), "custom/path.yaml");
        assert_eq!(custom.env_var_name(), None);
    }

    #[test]
    fn test_has_flag() {
        let args = vec!["--schema".to_string(), "extra".to_string()];
        assert!(has_flag(&args, "--schema"));
        assert!(!has_flag(&args, "--once"));
    }
}
