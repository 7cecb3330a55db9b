//! Logging setup built on `log` + `fern`.
//!
//! All log records go to an in-memory buffer that the logs dialog reads
//! (newest first). When file logging is enabled they are also appended to a
//! log file. Nothing is ever written to stdout, which belongs to the UI.

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_LINES;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared handle to the in-memory log buffer
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    level: log::LevelFilter,
    file_path: Option<PathBuf>,
}

impl Logger {
    /// In-memory logger at `info` level, without a log file
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            level: log::LevelFilter::Info,
            file_path: None,
        }
    }

    /// Build a logger from the logging section of the config
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let file_path = if config.enabled {
            match &config.file {
                Some(path) => Some(path.clone()),
                None => Some(Self::get_log_file_path()?),
            }
        } else {
            None
        };

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            level: config.level_filter()?,
            file_path,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Build the fern dispatch feeding this logger's buffer (and file, if any)
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let buffer = Arc::clone(&self.logs);
        let memory = fern::Output::call(move |record| {
            if let Ok(mut logs) = buffer.lock() {
                logs.push_back(record.args().to_string());
                while logs.len() > MAX_LOG_LINES {
                    logs.pop_front();
                }
            }
        });

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .chain(memory);

        if let Some(path) = &self.file_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Install this logger as the global `log` backend
    pub fn install(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .context("A global logger is already installed")
    }

    /// Get all log lines, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Default log file location under the platform data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("schedulist").join("schedulist.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
