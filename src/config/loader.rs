use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

const MIN_TICK_RATE_MS: u64 = 10;

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/dicetray/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dicetray").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `max_count` is at least 1
    /// - `default_count` does not exceed `max_count`
    /// - `tick_rate_ms` is at least 10
    /// - `pip` is exactly one character
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dice.max_count == 0 {
            return Err(ConfigError::ValidationError {
                message: "dice.max_count must be at least 1".to_string(),
            });
        }

        if let Some(count) = self.dice.default_count {
            if count > self.dice.max_count {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "dice.default_count ({}) exceeds dice.max_count ({})",
                        count, self.dice.max_count
                    ),
                });
            }
        }

        if self.ui.tick_rate_ms < MIN_TICK_RATE_MS {
            return Err(ConfigError::ValidationError {
                message: format!("ui.tick_rate_ms must be at least {}", MIN_TICK_RATE_MS),
            });
        }

        if self.ui.pip.chars().count() != 1 {
            return Err(ConfigError::ValidationError {
                message: format!("ui.pip must be a single character, got '{}'", self.ui.pip),
            });
        }

        Ok(())
    }
}
