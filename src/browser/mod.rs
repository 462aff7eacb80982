//! Catalog browser
//!
//! Two lazily expanding trees (artists and playlists) driven by the
//! keyboard, linked by a channel of add-track intents.

pub mod artists;
pub mod controller;
pub mod dispatch;
pub mod display;
pub mod events;
pub mod node;
pub mod playlists;
pub mod session;

pub use artists::build_artist_tree;
pub use controller::{Expansion, LazyTree};
pub use dispatch::{dispatch, navigation_for, KeyOutcome};
pub use display::{DisplayTree, Navigation, RowId, VisibleRow};
pub use events::{
    intent_channel, AddTrackIntent, Delivery, IntentConsumer, IntentReceiver, IntentSender,
    PlaylistSlot, SlotDirectory, UiHandle, UiQueue,
};
pub use node::{expand_with, Expand, Highlight, KeyAction, Node, NodeMeta};
pub use playlists::{build_playlist_tree, PlaylistTree};
pub use session::{LibrarySnapshot, Session};
