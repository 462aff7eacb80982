//! In-memory catalog
//!
//! Holds a whole catalog snapshot and answers queries the way the remote
//! client does: fully materialized and sorted.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    destination_name, Album, AlbumType, Artist, ChildKind, Entity, Playlist, Track, LIBRARY_ID,
};
use crate::domain::ordering::{sort_albums, sort_artists, sort_tracks_by_artist};
use crate::domain::ports::{CatalogSource, MutationSource};
use crate::error::{CatalogError, CatalogResult};

/// Artist entry of a catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub followed: bool,
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub top_tracks: Vec<String>,
}

/// Album entry of a catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: String,
    pub name: String,
    pub artist_id: String,
    pub release_date: String,
    #[serde(default)]
    pub album_type: AlbumType,
    #[serde(default)]
    pub tracks: Vec<String>,
}

/// Playlist entry of a catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(default)]
    pub tracks: Vec<String>,
}

/// Serializable catalog contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// The signed-in user; only their playlists are listed
    pub user_id: String,
    #[serde(default)]
    pub artists: Vec<ArtistRecord>,
    #[serde(default)]
    pub albums: Vec<AlbumRecord>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub playlists: Vec<PlaylistRecord>,
    /// Saved track ids
    #[serde(default)]
    pub library: Vec<String>,
}

impl CatalogSnapshot {
    fn artist(&self, id: &str) -> CatalogResult<&ArtistRecord> {
        self.artists
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::not_found("artist", id))
    }

    fn track(&self, id: &str) -> CatalogResult<&Track> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::not_found("track", id))
    }

    /// Resolve track ids, skipping dangling references
    fn tracks_by_id(&self, ids: &[String]) -> Vec<Track> {
        ids.iter()
            .filter_map(|id| self.tracks.iter().find(|t| &t.id == id))
            .cloned()
            .collect()
    }

    fn artists_by_id(&self, ids: &[String]) -> Vec<Artist> {
        ids.iter()
            .filter_map(|id| self.artists.iter().find(|a| &a.id == id))
            .map(to_artist)
            .collect()
    }

    /// Track id list of a destination, the library for [`LIBRARY_ID`]
    fn destination_mut(&mut self, destination_id: &str) -> CatalogResult<&mut Vec<String>> {
        if destination_id == LIBRARY_ID {
            return Ok(&mut self.library);
        }
        self.playlists
            .iter_mut()
            .find(|p| p.id == destination_id)
            .map(|p| &mut p.tracks)
            .ok_or_else(|| CatalogError::not_found("playlist", destination_id))
    }

    fn apply(&mut self, edit: &Edit<'_>) -> CatalogResult<()> {
        match *edit {
            Edit::Add { destination, track } => {
                self.track(track)?;
                let is_library = destination == LIBRARY_ID;
                let tracks = self.destination_mut(destination)?;
                if is_library && tracks.iter().any(|t| t == track) {
                    return Err(CatalogError::AlreadyPresent {
                        destination: destination_name(destination).to_string(),
                        track: track.to_string(),
                    });
                }
                tracks.push(track.to_string());
            }
            Edit::Remove { destination, track } => {
                let tracks = self.destination_mut(destination)?;
                let before = tracks.len();
                tracks.retain(|t| t != track);
                if tracks.len() == before {
                    return Err(CatalogError::NotPresent {
                        destination: destination_name(destination).to_string(),
                        track: track.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A single mutation against a snapshot
#[derive(Debug, Clone, Copy)]
pub(crate) enum Edit<'a> {
    Add {
        destination: &'a str,
        track: &'a str,
    },
    Remove {
        destination: &'a str,
        track: &'a str,
    },
}

fn to_artist(record: &ArtistRecord) -> Artist {
    Artist {
        id: record.id.clone(),
        name: record.name.clone(),
    }
}

/// Catalog served from memory
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    data: RwLock<CatalogSnapshot>,
}

impl MemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.read(|data| data.clone())
    }

    /// Saved library tracks, ordered by artist then name
    pub fn saved_tracks(&self) -> Vec<Track> {
        self.read(|data| {
            let mut tracks = data.tracks_by_id(&data.library);
            sort_tracks_by_artist(&mut tracks);
            tracks
        })
    }

    fn read<T>(&self, f: impl FnOnce(&CatalogSnapshot) -> T) -> T {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    /// Apply `edit` to a copy, let `commit` persist it, then swap it in.
    ///
    /// A failed commit leaves the in-memory catalog untouched.
    pub(crate) fn edit_with(
        &self,
        edit: Edit<'_>,
        commit: impl FnOnce(&CatalogSnapshot) -> CatalogResult<()>,
    ) -> CatalogResult<()> {
        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        let mut next = guard.clone();
        next.apply(&edit)?;
        commit(&next)?;
        *guard = next;
        Ok(())
    }

    fn list_children(
        data: &CatalogSnapshot,
        parent_id: &str,
        kind: ChildKind,
    ) -> CatalogResult<Vec<Entity>> {
        let entities = match kind {
            ChildKind::PopularTracks => {
                let artist = data.artist(parent_id)?;
                data.tracks_by_id(&artist.top_tracks)
                    .into_iter()
                    .map(Entity::Track)
                    .collect()
            }
            ChildKind::Albums => {
                data.artist(parent_id)?;
                let mut albums: Vec<Album> = data
                    .albums
                    .iter()
                    .filter(|a| a.artist_id == parent_id)
                    .filter(|a| matches!(a.album_type, AlbumType::Album | AlbumType::Single))
                    .map(|a| Album {
                        id: a.id.clone(),
                        name: a.name.clone(),
                        release_date: a.release_date.clone(),
                        album_type: a.album_type,
                    })
                    .collect();
                sort_albums(&mut albums);
                albums.into_iter().map(Entity::Album).collect()
            }
            ChildKind::AlbumTracks => {
                let album = data
                    .albums
                    .iter()
                    .find(|a| a.id == parent_id)
                    .ok_or_else(|| CatalogError::not_found("album", parent_id))?;
                data.tracks_by_id(&album.tracks)
                    .into_iter()
                    .map(Entity::Track)
                    .collect()
            }
            ChildKind::RelatedArtists => {
                let artist = data.artist(parent_id)?;
                let mut related = data.artists_by_id(&artist.related);
                sort_artists(&mut related);
                related.into_iter().map(Entity::Artist).collect()
            }
            ChildKind::UserPlaylists => data
                .playlists
                .iter()
                .filter(|p| p.owner_id == data.user_id)
                .map(|p| {
                    Entity::Playlist(Playlist {
                        id: p.id.clone(),
                        name: p.name.clone(),
                        owner_id: p.owner_id.clone(),
                    })
                })
                .collect(),
            ChildKind::PlaylistTracks => {
                let ids = if parent_id == LIBRARY_ID {
                    &data.library
                } else {
                    &data
                        .playlists
                        .iter()
                        .find(|p| p.id == parent_id)
                        .ok_or_else(|| CatalogError::not_found("playlist", parent_id))?
                        .tracks
                };
                let mut tracks = data.tracks_by_id(ids);
                sort_tracks_by_artist(&mut tracks);
                tracks.into_iter().map(Entity::Track).collect()
            }
        };
        Ok(entities)
    }
}

impl CatalogSource for MemoryCatalog {
    fn list_followed_entities(&self) -> CatalogResult<Vec<Artist>> {
        Ok(self.read(|data| {
            let mut artists: Vec<Artist> = data
                .artists
                .iter()
                .filter(|a| a.followed)
                .map(to_artist)
                .collect();
            sort_artists(&mut artists);
            artists
        }))
    }

    fn list_child_entities(&self, parent_id: &str, kind: ChildKind) -> CatalogResult<Vec<Entity>> {
        self.read(|data| Self::list_children(data, parent_id, kind))
    }
}

impl MutationSource for MemoryCatalog {
    fn add_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        self.edit_with(
            Edit::Add {
                destination: destination_id,
                track: track_id,
            },
            |_| Ok(()),
        )
    }

    fn remove_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        self.edit_with(
            Edit::Remove {
                destination: destination_id,
                track: track_id,
            },
            |_| Ok(()),
        )
    }
}
