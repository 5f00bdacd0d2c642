//! Configuration management for Family Hub
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, MAX_PAGE_SIZE, MAX_REMINDER_MINUTES, MAX_UPCOMING_DAYS,
    MAX_UPLOAD_MB,
};
use crate::icons::IconTheme;
use crate::utils::date;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
    pub gallery: GalleryConfig,
    pub events: EventsConfig,
    pub family: FamilyConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
    /// Keep everything in memory (nothing survives the process)
    pub in_memory: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for event and photo dates
    pub date_format: String,
    /// Time format for event start/end times
    pub time_format: String,
    /// Glyph set used for priorities and roles
    pub icon_theme: IconTheme,
    /// Color event lines by status in terminal output
    pub use_colors: bool,
}

/// Photo gallery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub photos_per_page: u64,
    /// Upload limit for gallery photos
    pub max_photo_size_mb: u64,
    /// Upload limit for member portraits
    pub max_member_photo_size_mb: u64,
}

/// Event calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    pub events_per_page: u64,
    /// Window used by the upcoming events feed
    pub upcoming_days: i64,
    /// Reminder offset applied when none is given
    pub default_reminder_minutes: i32,
}

/// Family directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    pub members_per_page: u64,
    pub app_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to stderr and the log file
    pub enabled: bool,
    /// One of: error, warn, info, debug, trace
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: date::ISO_DATE_FORMAT.to_string(),
            time_format: date::TIME_FORMAT.to_string(),
            icon_theme: IconTheme::Emoji,
            use_colors: true,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_per_page: 12,
            max_photo_size_mb: 10,
            max_member_photo_size_mb: 5,
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            events_per_page: 10,
            upcoming_days: 7,
            default_reminder_minutes: 60,
        }
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            members_per_page: 6,
            app_name: "Family Hub".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level name
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl GalleryConfig {
    pub fn max_photo_size_bytes(&self) -> u64 {
        self.max_photo_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn max_member_photo_size_bytes(&self) -> u64 {
        self.max_member_photo_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

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
    fn find_config_file() -> Option<PathBuf> {
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let page_sizes = [
            ("gallery.photos_per_page", self.gallery.photos_per_page),
            ("events.events_per_page", self.events.events_per_page),
            ("family.members_per_page", self.family.members_per_page),
        ];
        for (name, value) in page_sizes {
            if value == 0 || value > MAX_PAGE_SIZE {
                anyhow::bail!("{} must be between 1 and {}, got {}", name, MAX_PAGE_SIZE, value);
            }
        }

        let upload_limits = [
            ("gallery.max_photo_size_mb", self.gallery.max_photo_size_mb),
            ("gallery.max_member_photo_size_mb", self.gallery.max_member_photo_size_mb),
        ];
        for (name, value) in upload_limits {
            if value == 0 || value > MAX_UPLOAD_MB {
                anyhow::bail!("{} must be between 1 and {}, got {}", name, MAX_UPLOAD_MB, value);
            }
        }

        if !(0..=MAX_UPCOMING_DAYS).contains(&self.events.upcoming_days) {
            anyhow::bail!("events.upcoming_days must be between 0 and {}", MAX_UPCOMING_DAYS);
        }

        if !(0..=MAX_REMINDER_MINUTES).contains(&self.events.default_reminder_minutes) {
            anyhow::bail!(
                "events.default_reminder_minutes must be between 0 and {}",
                MAX_REMINDER_MINUTES
            );
        }

        if !date::is_valid_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Resolve the SQLite location, `None` when running in memory
    pub fn database_path(&self) -> Result<Option<PathBuf>> {
        if self.database.in_memory {
            return Ok(None);
        }
        match &self.database.path {
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Some(Self::get_data_dir()?.join("family.db"))),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Family Hub Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(date::ISO_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Directory holding the database and the log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
