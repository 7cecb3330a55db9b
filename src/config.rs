//! Configuration management for Schedulist
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Task data is never stored here; the configuration only shapes the UI.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_DUE_FORMAT, DEFAULT_HEADER_DATE_FORMAT, DRAG_THRESHOLD_DEFAULT, DRAG_THRESHOLD_MAX,
    DRAG_THRESHOLD_MIN, TICK_RATE_DEFAULT_MS, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use crate::icons::IconTheme;
use crate::task_list::TogglePolicy;
use crate::theme::ThemeName;
use crate::utils::datetime::{try_format_due, try_format_header_date};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub behavior: BehaviorConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (clicks, hover and drag-and-drop)
    pub mouse_enabled: bool,
    /// Distance in cells the pointer must travel before a press becomes a drag
    pub drag_threshold: u16,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
}

/// Task list behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Whether toggling completion reorders the list
    pub toggle_policy: TogglePolicy,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: ThemeName,
    pub icons: IconTheme,
    /// chrono format for the due line of each task
    pub due_format: String,
    /// chrono format for the "Today:" header
    pub header_date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log viewer
    pub enabled: bool,
    /// One of error, warn, info, debug, trace
    pub level: String,
    /// Log file path; defaults to the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            drag_threshold: DRAG_THRESHOLD_DEFAULT,
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            icons: IconTheme::default(),
            due_format: DEFAULT_DUE_FORMAT.to_string(),
            header_date_format: DEFAULT_HEADER_DATE_FORMAT.to_string(),
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

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("schedulist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("schedulist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(DRAG_THRESHOLD_MIN..=DRAG_THRESHOLD_MAX).contains(&self.ui.drag_threshold) {
            anyhow::bail!(
                "drag_threshold must be between {} and {} cells, got {}",
                DRAG_THRESHOLD_MIN,
                DRAG_THRESHOLD_MAX,
                self.ui.drag_threshold
            );
        }

        if !(TICK_RATE_MIN_MS..=TICK_RATE_MAX_MS).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        // chrono reports bad specifiers when formatting, not when building the format
        let sample = NaiveDate::from_ymd_opt(2026, 10, 15)
            .and_then(|date| date.and_hms_opt(14, 30, 0))
            .context("Failed to build sample timestamp")?;
        Self::validate_format("due_format", &self.display.due_format, |format| {
            try_format_due(sample, format).is_some()
        })?;
        Self::validate_format("header_date_format", &self.display.header_date_format, |format| {
            try_format_header_date(sample.date(), format).is_some()
        })?;

        self.logging.level_filter()?;

        Ok(())
    }

    fn validate_format(name: &str, format: &str, renders: impl Fn(&str) -> bool) -> Result<()> {
        if format.is_empty() {
            anyhow::bail!("{} cannot be empty", name);
        }
        if !renders(format) {
            anyhow::bail!("Invalid {} '{}'", name, format);
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Schedulist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("schedulist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
