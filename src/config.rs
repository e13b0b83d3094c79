//! Configuration management for termtask
//!
//! Handles loading, parsing, and validation of the optional TOML
//! configuration file. Every field has a default, so a missing or partial
//! file is fine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATETIME_FORMAT, EVENTS_FILE_NAME, LOG_FILE_NAME,
    TITLE_WIDTH_DEFAULT, TITLE_WIDTH_MAX, TITLE_WIDTH_MIN,
};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub events: EventsConfig,
}

/// List rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format used for created timestamps in the list view
    pub datetime_format: String,
    /// Column width titles are padded or truncated to in the list view
    pub title_width: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Log file path; defaults to a file in the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Event emission configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EventsConfig {
    /// Append task lifecycle events to a JSON-lines file
    pub enabled: bool,
    /// Event log path; defaults to a file in the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            title_width: TITLE_WIDTH_DEFAULT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Current directory
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        // 2. Platform config directory
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join(APP_DIR_NAME).join("config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.display.title_width < TITLE_WIDTH_MIN || self.display.title_width > TITLE_WIDTH_MAX
        {
            anyhow::bail!(
                "title_width must be between {} and {}, got {}",
                TITLE_WIDTH_MIN,
                TITLE_WIDTH_MAX,
                self.display.title_width
            );
        }

        if StrftimeItems::new(&self.display.datetime_format).any(|item| matches!(item, Item::Error))
        {
            anyhow::bail!(
                "Invalid datetime_format: '{}'",
                self.display.datetime_format
            );
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid logging level '{}'. Valid levels: {}",
                self.logging.level,
                valid_levels.join(", ")
            );
        }

        Ok(())
    }

    /// Generate a default configuration file at the given path
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# termtask configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Default config file path inside the platform config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join(APP_DIR_NAME).join("config.toml"))
    }
}

impl LoggingConfig {
    /// Resolved log file path, falling back to the platform default
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| default_data_file(LOG_FILE_NAME))
    }
}

impl EventsConfig {
    /// Resolved event log path, falling back to the platform default
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| default_data_file(EVENTS_FILE_NAME))
    }
}

/// Path of `name` inside the platform data directory, or the working
/// directory when the platform reports none.
fn default_data_file(name: &str) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(name)
}
