//! Reusable catalog fixtures and a wired-up browser harness.

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use trackwalk::browser::{
    build_artist_tree, build_playlist_tree, dispatch, intent_channel, IntentConsumer,
    IntentReceiver, KeyOutcome, LazyTree, LibrarySnapshot, RowId, Session, SlotDirectory, UiQueue,
};
use trackwalk::domain::catalog::{AlbumType, Track};
use trackwalk::domain::ports::MutationSource;
use trackwalk::infrastructure::catalog::{
    AlbumRecord, ArtistRecord, CatalogSnapshot, MemoryCatalog, PlaylistRecord,
};
use trackwalk::CatalogResult;

pub const USER: &str = "me";

pub fn track(id: &str, name: &str, artist: &str, number: u32, album: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        track_number: number,
        artists: vec![artist.to_string()],
        album: Some(album.to_string()),
    }
}

fn artist(id: &str, name: &str, related: &[&str], top: &[&str]) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: name.to_string(),
        followed: true,
        related: related.iter().map(|s| s.to_string()).collect(),
        top_tracks: top.iter().map(|s| s.to_string()).collect(),
    }
}

fn playlist(id: &str, name: &str, owner: &str, tracks: &[&str]) -> PlaylistRecord {
    PlaylistRecord {
        id: id.to_string(),
        name: name.to_string(),
        owner_id: owner.to_string(),
        tracks: tracks.iter().map(|s| s.to_string()).collect(),
    }
}

/// Three followed artists, two of the user's playlists (slots `b` and `c`),
/// one foreign playlist and a library holding `T2`.
pub fn sample_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        user_id: USER.to_string(),
        artists: vec![
            artist("AR1", "The Beatles", &["AR2"], &["T1", "T2"]),
            artist("AR2", "ACDC", &[], &["T3"]),
            artist("AR3", "Adele", &[], &[]),
        ],
        albums: vec![AlbumRecord {
            id: "AL1".to_string(),
            name: "Help!".to_string(),
            artist_id: "AR1".to_string(),
            release_date: "1965-08-06".to_string(),
            album_type: AlbumType::Album,
            tracks: vec!["T1".to_string(), "T2".to_string()],
        }],
        tracks: vec![
            track("T1", "Help!", "The Beatles", 1, "Help!"),
            track("T2", "Yesterday", "The Beatles", 13, "Help!"),
            track("T3", "Thunderstruck", "ACDC", 1, "The Razors Edge"),
        ],
        playlists: vec![
            playlist("PL123", "Road Trip", USER, &["T3"]),
            playlist("PL9", "Not Mine", "someone-else", &[]),
            playlist("PL456", "Chill", USER, &[]),
        ],
        library: vec!["T2".to_string()],
    }
}

/// Which mutation was called
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Add(String, String),
    Remove(String, String),
}

/// Forwards mutations to a catalog and records them
pub struct Recording {
    inner: Arc<MemoryCatalog>,
    pub calls: Mutex<Vec<Call>>,
}

impl Recording {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl MutationSource for Recording {
    fn add_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Add(destination_id.to_string(), track_id.to_string()));
        self.inner.add_track(destination_id, track_id)
    }

    fn remove_track(&self, destination_id: &str, track_id: &str) -> CatalogResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Remove(destination_id.to_string(), track_id.to_string()));
        self.inner.remove_track(destination_id, track_id)
    }
}

/// Both trees over an in-memory catalog, with the consumer run by hand
pub struct Harness {
    pub catalog: Arc<MemoryCatalog>,
    pub mutations: Arc<Recording>,
    pub session: Session,
    pub artists: LazyTree,
    pub playlists: LazyTree,
    pub slots: SlotDirectory,
    pub consumer: IntentConsumer,
    pub receiver: IntentReceiver,
    pub tasks: UiQueue<LazyTree>,
}

impl Harness {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        let catalog = Arc::new(MemoryCatalog::new(snapshot));
        let mutations = Arc::new(Recording {
            inner: Arc::clone(&catalog),
            calls: Mutex::new(Vec::new()),
        });
        let library = Arc::new(LibrarySnapshot::from_tracks(&catalog.saved_tracks()));
        let (intents, receiver) = intent_channel(8);
        let session = Session::new(catalog.clone(), mutations.clone(), library, intents);

        let artists = build_artist_tree(&session);
        let built = build_playlist_tree(&session);
        let tasks = UiQueue::new();
        let consumer = built.consumer(&session, tasks.handle());

        Self {
            catalog,
            mutations,
            session,
            artists,
            playlists: built.tree,
            slots: built.slots,
            consumer,
            receiver,
            tasks,
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_snapshot())
    }

    /// Hand every queued intent to the consumer, then run the UI tasks it
    /// posted. Returns how many UI tasks ran.
    pub fn pump(&mut self) -> usize {
        while let Some(intent) = self.receiver.try_recv() {
            self.consumer.handle(intent);
        }
        self.tasks.drain(&mut self.playlists)
    }
}

pub fn press(tree: &mut LazyTree, code: KeyCode) -> KeyOutcome {
    dispatch(tree, &KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn press_char(tree: &mut LazyTree, c: char) -> KeyOutcome {
    press(tree, KeyCode::Char(c))
}

/// Focus the child of the current row whose label is `label`
pub fn focus_child(tree: &mut LazyTree, label: &str) -> RowId {
    let row = tree
        .display()
        .children(tree.current())
        .iter()
        .copied()
        .find(|r| tree.display().label(*r) == label)
        .unwrap_or_else(|| panic!("no child labelled {:?}", label));
    tree.set_current(row);
    row
}

/// Focus a top-level row by label
pub fn focus_top(tree: &mut LazyTree, label: &str) -> RowId {
    let row = tree
        .top_level()
        .iter()
        .copied()
        .find(|r| tree.display().label(*r) == label)
        .unwrap_or_else(|| panic!("no top-level row labelled {:?}", label));
    tree.set_current(row);
    row
}

pub fn child_labels(tree: &LazyTree, row: RowId) -> Vec<String> {
    tree.display()
        .children(row)
        .iter()
        .map(|r| tree.display().label(*r).to_string())
        .collect()
}
