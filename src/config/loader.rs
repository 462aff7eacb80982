//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::{ColorMode, Config, LogLevel};

/// Non-fatal configuration warning surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file (must exist), else the user config if present, else
/// defaults. Environment overrides are applied last.
pub fn resolve(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path() {
            Some(path) if path.exists() => load_with_warnings(&path)?,
            _ => (Config::default(), Vec::new()),
        },
    };
    Ok((with_env_overrides(config), warnings))
}

/// `~/.config/trackwalk/config.toml`, honoring `XDG_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("trackwalk/config.toml"))
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Apply environment variable overrides (TRACKWALK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Overrides read through `lookup`; malformed values are ignored
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // TRACKWALK_CATALOG
    if let Some(path) = lookup("TRACKWALK_CATALOG").filter(|p| !p.is_empty()) {
        config.catalog.path = Some(PathBuf::from(path));
    }

    // TRACKWALK_REQUEST_TIMEOUT (seconds)
    if let Some(secs) = lookup("TRACKWALK_REQUEST_TIMEOUT").and_then(|v| v.trim().parse().ok()) {
        config.catalog.request_timeout_secs = secs;
    }

    // TRACKWALK_COLOR
    if let Some(mode) = lookup("TRACKWALK_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.ui.color = mode;
    }

    // TRACKWALK_UNICODE
    if let Some(val) = lookup("TRACKWALK_UNICODE") {
        config.ui.unicode = val.to_lowercase() != "false" && val != "0";
    }

    // TRACKWALK_QUEUE_DEPTH
    if let Some(depth) = lookup("TRACKWALK_QUEUE_DEPTH").and_then(|v| v.trim().parse().ok()) {
        config.events.queue_depth = depth;
    }

    // TRACKWALK_LOG_LEVEL
    if let Some(level) = lookup("TRACKWALK_LOG_LEVEL").and_then(|v| LogLevel::parse(&v)) {
        config.log.level = level;
    }

    // TRACKWALK_LOG_FILE
    if let Some(path) = lookup("TRACKWALK_LOG_FILE").filter(|p| !p.is_empty()) {
        config.log.file = Some(PathBuf::from(path));
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "path",
        "request_timeout_secs",
        "ui",
        "color",
        "unicode",
        "tick_ms",
        "events",
        "queue_depth",
        "log",
        "level",
        "file",
        "scrollback",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
