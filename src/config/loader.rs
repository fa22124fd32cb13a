use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::streak::DeliveryTime;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ARACY_API_URL";

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/aracy/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("aracy").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - If the file exists, parses it as TOML.
    /// - Applies the `ARACY_API_URL` override, then validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Config::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Replaces the API base URL unless `url` is blank.
    pub fn apply_api_url_override(&mut self, url: String) {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return;
        }
        tracing::debug!(base_url = %trimmed, "API base URL overridden");
        self.api.base_url = trimmed.trim_end_matches('/').to_string();
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is http(s)
    /// - Timeouts and card count are non-zero
    /// - The default delivery time parses as `HH:MM`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("API base URL '{}' must start with http:// or https://", url),
            });
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "API timeouts must be greater than zero".to_string(),
            });
        }

        if self.ritual.card_count == 0 {
            return Err(ConfigError::ValidationError {
                message: "Ritual card count must be greater than zero".to_string(),
            });
        }

        if DeliveryTime::parse(&self.ritual.default_delivery_time).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Default delivery time '{}' is not a valid HH:MM time",
                    self.ritual.default_delivery_time
                ),
            });
        }

        Ok(())
    }
}
