//! Error types for trackwalk
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for catalog and mutation calls
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a catalog query or a playlist mutation
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The referenced artist, album or playlist does not exist
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// The track is already in the destination
    #[error("track '{track}' is already in {destination}")]
    AlreadyPresent { destination: String, track: String },

    /// The track is not in the destination
    #[error("track '{track}' is not in {destination}")]
    NotPresent { destination: String, track: String },

    /// Catalog snapshot could not be parsed or written
    #[error("catalog {path} is corrupted: {message}")]
    Corrupted { path: PathBuf, message: String },

    /// The call did not finish within the configured deadline
    #[error("{operation} timed out after {}s", .after.as_secs_f32())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// The source could not service the call at all
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Configuration loading failure
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}
