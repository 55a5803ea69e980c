//! Configuration loading for the notification queue.
//!
//! [`ConfigLoader::load`] reads `notifications.toml` from the NovaDE
//! configuration directory (e.g. `~/.config/NovaDE` on Linux, resolved with
//! `directories-next`). A missing or blank file yields the default
//! configuration. Every path ends in [`ConfigLoader::validate_config`].

use directories_next::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::NotificationConfig;
use crate::error::ConfigError;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "NovaDE";
const APPLICATION: &str = "NovaDE";

/// Name of the configuration file inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "notifications.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<NotificationConfig, ConfigError> {
        let path = Self::default_config_path()?;
        Self::load_from_path(&path)
    }

    /// Full path of `notifications.toml` in the user's config directory.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::DirectoryUnavailable { dir_type: "config".to_string() })
    }

    /// Loads the configuration from `path`, falling back to defaults if it does not exist.
    pub fn load_from_path(path: &Path) -> Result<NotificationConfig, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No configuration at {:?}, using defaults", path);
                Self::validate_config(NotificationConfig::default())
            }
            Err(e) => Err(ConfigError::ReadError { path: path.to_path_buf(), source: e }),
        }
    }

    /// Parses and validates TOML text.
    pub fn load_from_str(content: &str) -> Result<NotificationConfig, ConfigError> {
        let config = if content.trim().is_empty() {
            NotificationConfig::default()
        } else {
            toml::from_str(content)?
        };
        Self::validate_config(config)
    }

    /// Normalizes log names to lowercase and checks value ranges.
    pub fn validate_config(mut config: NotificationConfig) -> Result<NotificationConfig, ConfigError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level '{}'. Must be one of: {}",
                config.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format '{}'. Must be one of: {}",
                config.logging.format,
                VALID_LOG_FORMATS.join(", ")
            )));
        }

        if config.queue.show_age_threshold < -1 {
            return Err(ConfigError::ValidationError(format!(
                "show_age_threshold must be -1 (disabled) or a number of seconds, got {}",
                config.queue.show_age_threshold
            )));
        }

        Ok(config)
    }
}
