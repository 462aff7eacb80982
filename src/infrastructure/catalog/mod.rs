//! Catalog backends
//!
//! - `memory` - in-memory catalog with the remote client's ordering rules
//! - `file` - JSON snapshot on disk, edits persisted atomically
//! - `deadline` - timeout wrapper around any source

mod deadline;
mod file;
mod memory;

pub use deadline::{bounded_reads, Deadline};
pub use file::FileCatalog;
pub use memory::{AlbumRecord, ArtistRecord, CatalogSnapshot, MemoryCatalog, PlaylistRecord};
