//! Playlist tree
//!
//! The library and the user's playlists, each under a one-character slot.
//! Tracks listed here can be removed with `x`; removed rows stay in place
//! and are recolored.

use std::sync::Arc;

use log::{error, info};

use crate::domain::catalog::{destination_name, ChildKind, Entity, Playlist, LIBRARY_ID};
use crate::domain::ports::MutationSource;
use crate::error::CatalogResult;

use super::controller::LazyTree;
use super::events::{IntentConsumer, PlaylistSlot, SlotDirectory, UiHandle};
use super::node::{Expand, Highlight, KeyAction, Node};
use super::session::{LibrarySnapshot, Session};

pub const TITLE: &str = "PLAYLISTS";
pub const ROOT_LABEL: &str = "My Playlists";
pub const LIBRARY_LABEL: &str = "Library";

/// Slot characters in display order; `q` is left out because it quits
pub const SLOT_ALPHABET: &str = "abcdefghijklmnoprstuvwxyz1234567890";

/// Key that removes a track from its playlist
pub const REMOVE_KEY: char = 'x';

/// The playlist tree plus what the intent consumer needs to update it
pub struct PlaylistTree {
    pub tree: LazyTree,
    pub slots: SlotDirectory,
    remove_action: Arc<dyn KeyAction>,
}

impl PlaylistTree {
    /// Consumer that applies add-track intents to this tree through `ui`
    pub fn consumer(&self, session: &Session, ui: UiHandle<LazyTree>) -> IntentConsumer {
        IntentConsumer::new(
            self.slots.clone(),
            Arc::clone(&session.mutations),
            Arc::clone(&session.library),
            Arc::clone(&self.remove_action),
            ui,
        )
    }
}

/// Build the playlist tree, loading the slot list right away
pub fn build_playlist_tree(session: &Session) -> PlaylistTree {
    let slots = SlotDirectory::default();
    let remove_action: Arc<dyn KeyAction> = Arc::new(RemoveFromPlaylist::new(
        Arc::clone(&session.mutations),
        Arc::clone(&session.library),
    ));
    let tracks: Arc<dyn Expand> = Arc::new(PlaylistTracks {
        session: session.clone(),
        remove_action: Arc::clone(&remove_action),
    });
    let root = Arc::new(PlaylistRoot {
        session: session.clone(),
        slots: slots.clone(),
        tracks,
    });

    PlaylistTree {
        tree: LazyTree::build(TITLE, ROOT_LABEL, root),
        slots,
        remove_action,
    }
}

pub fn slot_label(slot: char, name: &str) -> String {
    format!("{}) {}", slot, name)
}

/// Lists the library and the user's playlists and refreshes the slot
/// directory
struct PlaylistRoot {
    session: Session,
    slots: SlotDirectory,
    tracks: Arc<dyn Expand>,
}

impl Expand for PlaylistRoot {
    fn children(&self, _node: &Node) -> CatalogResult<Vec<Node>> {
        let playlists: Vec<Playlist> = self
            .session
            .catalog
            .list_child_entities("", ChildKind::UserPlaylists)?
            .into_iter()
            .filter_map(|e| match e {
                Entity::Playlist(p) => Some(p),
                _ => None,
            })
            .collect();

        let library = (LIBRARY_LABEL.to_string(), LIBRARY_ID.to_string());
        let entries =
            std::iter::once(library).chain(playlists.into_iter().map(|p| (p.name, p.id)));

        let mut alphabet = SLOT_ALPHABET.chars();
        let mut slots = Vec::new();
        let mut nodes = Vec::new();
        for (name, id) in entries {
            let node = match alphabet.next() {
                Some(slot) => {
                    let label = slot_label(slot, &name);
                    slots.push(PlaylistSlot {
                        name: slot.to_string(),
                        id: id.clone(),
                        label: label.clone(),
                    });
                    Node::new(slot.to_string(), label, id)
                }
                None => Node::new("", name, id),
            };
            nodes.push(node.with_expander(Arc::clone(&self.tracks)));
        }

        info!("{} playlists, {} with a slot", nodes.len(), slots.len());
        self.slots.replace(slots);
        Ok(nodes)
    }
}

/// Lists the tracks of a playlist node; the library for an empty id
struct PlaylistTracks {
    session: Session,
    remove_action: Arc<dyn KeyAction>,
}

impl Expand for PlaylistTracks {
    fn children(&self, node: &Node) -> CatalogResult<Vec<Node>> {
        let nodes = self
            .session
            .catalog
            .list_child_entities(&node.id, ChildKind::PlaylistTracks)?
            .into_iter()
            .filter_map(|e| match e {
                Entity::Track(t) => Some(t),
                _ => None,
            })
            .map(|t| {
                let label = format!("{} - {}", t.primary_artist(), t.name);
                Node::new(t.name, label, t.id)
                    .with_playlist(node.id.clone())
                    .with_key_action(Arc::clone(&self.remove_action))
            })
            .collect();
        Ok(nodes)
    }
}

/// Removes the focused track from the playlist it is listed under
pub struct RemoveFromPlaylist {
    mutations: Arc<dyn MutationSource>,
    library: Arc<LibrarySnapshot>,
}

impl RemoveFromPlaylist {
    pub fn new(mutations: Arc<dyn MutationSource>, library: Arc<LibrarySnapshot>) -> Self {
        Self { mutations, library }
    }
}

impl KeyAction for RemoveFromPlaylist {
    fn on_key(&self, node: &mut Node, key: char) {
        if key != REMOVE_KEY {
            return;
        }
        let Some(playlist_id) = node.meta.playlist_id.clone() else {
            return;
        };

        match self.mutations.remove_track(&playlist_id, &node.id) {
            Ok(()) => {
                if playlist_id == LIBRARY_ID {
                    self.library.forget(&node.id);
                }
                node.meta.highlight = Some(Highlight::Removed);
                info!(
                    "removed \"{}\" from {}",
                    node.label,
                    destination_name(&playlist_id)
                );
            }
            Err(e) => error!(
                "cannot remove \"{}\" from {}: {}",
                node.label,
                destination_name(&playlist_id),
                e
            ),
        }
    }
}
