//! Domain layer
//!
//! Catalog records, their ordering rules, and the ports the browser talks
//! through. Nothing here touches the terminal or the filesystem.

pub mod catalog;
pub mod ordering;
pub mod ports;

pub use catalog::{Album, AlbumType, Artist, ChildKind, Entity, Playlist, Track, LIBRARY_ID};
pub use ports::{CatalogSource, MutationSource};
