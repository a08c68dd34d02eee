//! Configuration file handling.
//!
//! Loading and saving of bountyscope configuration from a TOML file.
//!
//! # Configuration Location
//!
//! - Linux: `~/.config/bountyscope/config.toml`
//! - macOS: `~/Library/Application Support/bountyscope/config.toml`
//! - Windows: `%APPDATA%\bountyscope\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! schedule_path = "/etc/bountyscope/bountydata.txt"
//! cache_ttl_hours = 24
//! default_format = "table"
//! install_lookup = true
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration.
///
/// Can be loaded from a TOML file or created with default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the reward schedule text file lives.
    ///
    /// `None` (plus no `--schedule` flag) means every estimate runs with
    /// an empty schedule and all bounties come out 0.
    pub schedule_path: Option<PathBuf>,

    /// How long to cache install-count lookups, in hours.
    ///
    /// Default: 24 hours
    pub cache_ttl_hours: u64,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "table", "json"
    /// Default: "table"
    pub default_format: String,

    /// Whether to resolve active install counts for each record.
    ///
    /// Default: true
    pub install_lookup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_path: None,
            cache_ttl_hours: 24,
            default_format: "table".to_string(),
            install_lookup: true,
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bountyscope")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.schedule_path, None);
        assert_eq!(config.cache_ttl_hours, 24);
        assert_eq!(config.default_format, "table");
        assert!(config.install_lookup);
    }

    #[test]
    fn test_config_parses_partial_file() {
        let config: Config = toml::from_str("default_format = \"json\"").unwrap();

        assert_eq!(config.default_format, "json");
        assert_eq!(config.cache_ttl_hours, 24);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.schedule_path = Some(PathBuf::from("/data/bountydata.txt"));
        config.cache_ttl_hours = 48;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.schedule_path, config.schedule_path);
        assert_eq!(parsed.cache_ttl_hours, 48);
    }
}
