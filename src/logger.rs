//! Opt-in file logging
//!
//! Installs a [`fern`] dispatcher writing to the configured log file. The
//! global logger can only be set once per process, so initialization is
//! guarded: repeated calls are accepted and the first installed target
//! stays active.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

static INSTALLED: OnceCell<PathBuf> = OnceCell::new();

/// Installs the file logger described by `config`.
///
/// Does nothing when logging is disabled. Creates the parent directory of
/// the log file if needed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    INSTALLED.get_or_try_init(|| -> Result<PathBuf> {
        let path = config.file_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.target(),
                    message
                ));
            })
            .level(level_filter(&config.level))
            .chain(
                fern::log_file(&path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .context("Failed to install logger")?;

        Ok(path)
    })?;

    Ok(())
}

/// Path of the active log file, when file logging has been installed.
pub fn active_log_file() -> Option<PathBuf> {
    INSTALLED.get().cloned()
}

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
