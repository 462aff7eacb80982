//! MutationSource port - playlist and library edits

use crate::error::CatalogResult;

/// Playlist edits.
///
/// An empty `destination_id` ([`crate::domain::catalog::LIBRARY_ID`])
/// targets the user's saved library instead of a playlist.
pub trait MutationSource: Send + Sync {
    fn add_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()>;

    fn remove_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()>;
}

impl<T: MutationSource + ?Sized> MutationSource for std::sync::Arc<T> {
    fn add_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        (**self).add_track(destination_id, track_id)
    }

    fn remove_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        (**self).remove_track(destination_id, track_id)
    }
}
