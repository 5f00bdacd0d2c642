//! Logging setup built on `log` and `fern`
//!
//! When logging is enabled every record at or above the configured level goes
//! to stderr and to `family-hub.log` in the data directory. When disabled only
//! warnings and errors reach stderr. In both cases the most recent lines are
//! kept in memory so the CLI can show them.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;

/// Number of lines kept in memory
const MEMORY_LINES: usize = 500;

/// Shared logger configuration and in-memory tail
#[derive(Clone)]
pub struct Logger {
    enabled: bool,
    level: LevelFilter,
    log_file: Option<PathBuf>,
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    /// Build a logger from the `[logging]` section without installing it
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let (level, log_file) = if config.enabled {
            (config.level_filter()?, Some(Self::get_log_file_path()?))
        } else {
            (LevelFilter::Warn, None)
        };

        Ok(Self {
            enabled: config.enabled,
            level,
            log_file,
            logs: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    /// Location of the log file in the data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
    }

    /// Assemble the fern dispatcher for this configuration
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let memory = Arc::clone(&self.logs);

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .level_for("sqlx", LevelFilter::Warn)
            .level_for("sea_orm", LevelFilter::Warn)
            .chain(std::io::stderr())
            .chain(fern::Output::call(move |record| {
                if let Ok(mut logs) = memory.lock() {
                    if logs.len() == MEMORY_LINES {
                        logs.remove(0);
                    }
                    logs.push(record.args().to_string());
                }
            }));

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Install as the global `log` backend
    pub fn install(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .context("A global logger is already installed")?;
        Ok(())
    }

    /// Recent log lines, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}
