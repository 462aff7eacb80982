//! Configuration module for trackwalk
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TRACKWALK_*)
//! 3. `--config` file, or the user config (~/.config/trackwalk/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{CatalogConfig, ColorMode, Config, EventsConfig, LogConfig, LogLevel, UiConfig};
