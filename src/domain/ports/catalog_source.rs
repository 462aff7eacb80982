//! CatalogSource port - read access to the music catalog
//!
//! Implementations page through the remote catalog and sort before
//! returning, so callers can render results in the order given.

use crate::domain::catalog::{Artist, ChildKind, Entity};
use crate::error::CatalogResult;

/// Read-only catalog queries
pub trait CatalogSource: Send + Sync {
    /// Artists the user follows, ordered by name ignoring a leading "The "
    fn list_followed_entities(&self) -> CatalogResult<Vec<Artist>>;

    /// Children of `parent_id` of the given kind, in display order
    fn list_child_entities(&self, parent_id: &str, kind: ChildKind) -> CatalogResult<Vec<Entity>>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<T> {
    fn list_followed_entities(&self) -> CatalogResult<Vec<Artist>> {
        (**self).list_followed_entities()
    }

    fn list_child_entities(&self, parent_id: &str, kind: ChildKind) -> CatalogResult<Vec<Entity>> {
        (**self).list_child_entities(parent_id, kind)
    }
}
