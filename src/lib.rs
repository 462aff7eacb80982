//! trackwalk - terminal browser for a music catalog and your playlists
//!
//! Followed artists on one side and the user's playlists on the other, both
//! as lazily expanding trees. Tracks are sent from the artist tree to a
//! playlist by pressing the playlist's slot character and removed from a
//! playlist with `x`.

pub mod browser;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

// Re-exports for convenience
pub use browser::{LazyTree, Node, Session};
pub use config::Config;
pub use error::{CatalogError, CatalogResult, ConfigError};
