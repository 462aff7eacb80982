//! Shared browsing session
//!
//! Everything the tree builders and node actions need from the outside
//! world, built once at startup and handed down explicitly.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::catalog::Track;
use crate::domain::ports::{CatalogSource, MutationSource};

use super::events::IntentSender;

/// Ids of the tracks saved in the library
///
/// Loaded once at startup and kept current when tracks are added to or
/// removed from the library through the browser.
#[derive(Debug, Default)]
pub struct LibrarySnapshot {
    ids: RwLock<HashSet<String>>,
}

impl LibrarySnapshot {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            ids: RwLock::new(ids.into_iter().collect()),
        }
    }

    pub fn from_tracks(tracks: &[Track]) -> Self {
        Self::new(tracks.iter().map(|t| t.id.clone()))
    }

    pub fn contains(&self, track_id: &str) -> bool {
        match self.ids.read() {
            Ok(ids) => ids.contains(track_id),
            Err(poisoned) => poisoned.into_inner().contains(track_id),
        }
    }

    pub fn len(&self) -> usize {
        match self.ids.read() {
            Ok(ids) => ids.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remember(&self, track_id: &str) {
        self.write().insert(track_id.to_string());
    }

    pub fn forget(&self, track_id: &str) {
        self.write().remove(track_id);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashSet<String>> {
        match self.ids.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Context shared by both trees
#[derive(Clone)]
pub struct Session {
    pub catalog: Arc<dyn CatalogSource>,
    pub mutations: Arc<dyn MutationSource>,
    pub library: Arc<LibrarySnapshot>,
    pub intents: IntentSender,
}

impl Session {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        mutations: Arc<dyn MutationSource>,
        library: Arc<LibrarySnapshot>,
        intents: IntentSender,
    ) -> Self {
        Self {
            catalog,
            mutations,
            library,
            intents,
        }
    }
}
