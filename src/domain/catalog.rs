//! Catalog entity records
//!
//! These are the records a catalog source hands back. They carry only what
//! the browser needs to label and identify nodes.

use serde::{Deserialize, Serialize};

/// Id of the user's default library (saved tracks) wherever a playlist id
/// is expected.
pub const LIBRARY_ID: &str = "";

/// An artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

/// Release type of an album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    #[default]
    Album,
    Single,
    Compilation,
    AppearsOn,
}

impl AlbumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
            AlbumType::AppearsOn => "appears_on",
        }
    }
}

impl std::fmt::Display for AlbumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An album, single or compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    pub release_date: String,
    #[serde(default)]
    pub album_type: AlbumType,
}

/// A track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub track_number: u32,
    /// Artist names, primary artist first
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub album: Option<String>,
}

impl Track {
    /// Primary artist name, empty when the track has none
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or("")
    }
}

/// A user playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}

/// Any record a catalog query can return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Artist(Artist),
    Album(Album),
    Track(Track),
    Playlist(Playlist),
}

/// What kind of children to list under a parent id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    /// An artist's top tracks
    PopularTracks,
    /// An artist's albums and singles, oldest first
    Albums,
    /// Tracks of an album in album order
    AlbumTracks,
    /// Artists related to an artist
    RelatedArtists,
    /// Playlists owned by the current user (parent id is ignored)
    UserPlaylists,
    /// Tracks of a playlist; [`LIBRARY_ID`] lists the saved library
    PlaylistTracks,
}

impl ChildKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildKind::PopularTracks => "popular tracks",
            ChildKind::Albums => "albums",
            ChildKind::AlbumTracks => "album tracks",
            ChildKind::RelatedArtists => "related artists",
            ChildKind::UserPlaylists => "playlists",
            ChildKind::PlaylistTracks => "playlist tracks",
        }
    }
}

/// Human name for a playlist id in log lines
pub fn destination_name(playlist_id: &str) -> &str {
    if playlist_id == LIBRARY_ID {
        "library"
    } else {
        playlist_id
    }
}
