//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::loader::{self, ConfigWarning};

/// Catalog source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog snapshot; defaults to the user data directory
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Deadline for a single catalog read, 0 disables it
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}

/// Terminal UI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Input poll interval; UI tasks and log lines are picked up at this rate
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Cross-tree event configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Pending add-track intents held before new ones are dropped
    #[serde(default = "default_queue_depth")]
    pub queue_depth: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            queue_depth: default_queue_depth(),
        }
    }
}

fn default_queue_depth() -> usize {
    crate::browser::events::DEFAULT_QUEUE_DEPTH
}

/// Log level names accepted in config and environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "off" => Some(Self::Off),
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Also append log lines to this file
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Lines kept for the log pane
    #[serde(default = "default_scrollback")]
    pub scrollback: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
            scrollback: default_scrollback(),
        }
    }
}

fn default_scrollback() -> usize {
    crate::logging::DEFAULT_SCROLLBACK
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub events: EventsConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults, then apply
    /// environment overrides
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (TRACKWALK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Catalog snapshot to open
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("trackwalk/catalog.json")))
    }

    /// `None` when the deadline is disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.catalog.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms.max(1))
    }
}
