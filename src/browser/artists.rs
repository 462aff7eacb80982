//! Artist tree
//!
//! Followed artists at the top; each expands to popular tracks, albums and
//! related artists. Every track row can be sent to a playlist slot by
//! pressing the slot's character.

use std::sync::Arc;

use log::debug;

use crate::domain::catalog::{Album, AlbumType, Artist, ChildKind, Entity, Track};
use crate::domain::ordering::name_key;
use crate::error::CatalogResult;

use super::controller::LazyTree;
use super::events::{AddTrackIntent, IntentSender};
use super::node::{Expand, Highlight, KeyAction, Node};
use super::session::Session;

pub const TITLE: &str = "ARTISTS";
pub const ROOT_LABEL: &str = "Followed Artists";

pub const POPULAR_TRACKS: &str = "Popular Tracks";
pub const ALBUMS: &str = "Albums";
pub const RELATED_ARTISTS: &str = "Related Artists";

/// Build the artist tree, loading followed artists right away
pub fn build_artist_tree(session: &Session) -> LazyTree {
    LazyTree::build(TITLE, ROOT_LABEL, loader(session, Step::Followed))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Followed,
    Categories,
    Popular,
    Albums,
    AlbumTracks,
    Related,
}

struct ArtistLoader {
    session: Session,
    step: Step,
}

fn loader(session: &Session, step: Step) -> Arc<dyn Expand> {
    Arc::new(ArtistLoader {
        session: session.clone(),
        step,
    })
}

impl Expand for ArtistLoader {
    fn children(&self, node: &Node) -> CatalogResult<Vec<Node>> {
        let session = &self.session;
        let nodes = match self.step {
            Step::Followed => session
                .catalog
                .list_followed_entities()?
                .into_iter()
                .map(|a| artist_node(session, a))
                .collect(),
            Step::Categories => vec![
                Node::new(POPULAR_TRACKS, POPULAR_TRACKS, node.id.clone())
                    .with_expander(loader(session, Step::Popular)),
                Node::new(ALBUMS, ALBUMS, node.id.clone())
                    .with_expander(loader(session, Step::Albums)),
                Node::new(RELATED_ARTISTS, RELATED_ARTISTS, node.id.clone())
                    .with_expander(loader(session, Step::Related)),
            ],
            Step::Popular => self
                .list(&node.id, ChildKind::PopularTracks)?
                .into_iter()
                .filter_map(into_track)
                .map(|t| {
                    let label = popular_track_label(&t);
                    track_node(session, t, label)
                })
                .collect(),
            Step::Albums => self
                .list(&node.id, ChildKind::Albums)?
                .into_iter()
                .filter_map(|e| match e {
                    Entity::Album(album) => Some(album_node(session, album)),
                    _ => None,
                })
                .collect(),
            Step::AlbumTracks => self
                .list(&node.id, ChildKind::AlbumTracks)?
                .into_iter()
                .filter_map(into_track)
                .map(|t| {
                    let label = album_track_label(&t);
                    track_node(session, t, label)
                })
                .collect(),
            Step::Related => self
                .list(&node.id, ChildKind::RelatedArtists)?
                .into_iter()
                .filter_map(|e| match e {
                    Entity::Artist(artist) => Some(artist_node(session, artist)),
                    _ => None,
                })
                .collect(),
        };
        Ok(nodes)
    }
}

impl ArtistLoader {
    fn list(&self, parent_id: &str, kind: ChildKind) -> CatalogResult<Vec<Entity>> {
        debug!("listing {} of {}", kind.as_str(), parent_id);
        self.session.catalog.list_child_entities(parent_id, kind)
    }
}

fn into_track(entity: Entity) -> Option<Track> {
    match entity {
        Entity::Track(track) => Some(track),
        _ => None,
    }
}

fn artist_node(session: &Session, artist: Artist) -> Node {
    Node::new(name_key(&artist.name), artist.name.clone(), artist.id)
        .with_expander(loader(session, Step::Categories))
}

fn album_node(session: &Session, album: Album) -> Node {
    Node::new(album.name.clone(), album_label(&album), album.id)
        .with_expander(loader(session, Step::AlbumTracks))
}

fn track_node(session: &Session, track: Track, label: String) -> Node {
    let mut node = Node::new(track.name, label, track.id).with_key_action(Arc::new(
        SendToPlaylist {
            intents: session.intents.clone(),
        },
    ));
    if session.library.contains(&node.id) {
        node = node.with_highlight(Highlight::InLibrary);
    }
    node
}

/// `Name - (date)`, plus the release type for anything but full albums
pub fn album_label(album: &Album) -> String {
    let mut label = format!("{} - ({})", album.name, album.release_date);
    if album.album_type != AlbumType::Album {
        label.push_str(&format!(" ({})", album.album_type));
    }
    label
}

pub fn album_track_label(track: &Track) -> String {
    format!("{:2} - {}", track.track_number, track.name)
}

pub fn popular_track_label(track: &Track) -> String {
    match &track.album {
        Some(album) => format!("{} - {}", track.name, album),
        None => track.name.clone(),
    }
}

/// Sends the focused track to the playlist in the pressed slot
pub struct SendToPlaylist {
    intents: IntentSender,
}

impl SendToPlaylist {
    pub fn new(intents: IntentSender) -> Self {
        Self { intents }
    }
}

impl KeyAction for SendToPlaylist {
    fn on_key(&self, node: &mut Node, key: char) {
        self.intents.send(AddTrackIntent {
            track: node.clone(),
            destination: key.to_string(),
        });
    }
}
