//! Cross-tree events
//!
//! Track actions in the artist tree emit [`AddTrackIntent`]s on a bounded
//! channel. A single consumer thread owned by the playlist side performs
//! the mutation and hands the resulting display change back to the UI loop
//! through a [`UiQueue`]. The consumer never touches display state itself.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender, TrySendError};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use log::{debug, error, info, warn};

use crate::domain::catalog::{destination_name, LIBRARY_ID};
use crate::domain::ports::MutationSource;

use super::controller::LazyTree;
use super::node::{Highlight, KeyAction, Node};
use super::session::LibrarySnapshot;

/// Default bound of the intent channel
pub const DEFAULT_QUEUE_DEPTH: usize = 10;

/// "Add this track to the playlist in slot `destination`"
#[derive(Debug, Clone)]
pub struct AddTrackIntent {
    pub track: Node,
    /// Slot name of the target playlist
    pub destination: String,
}

/// Producer side of the intent channel
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: SyncSender<AddTrackIntent>,
}

impl IntentSender {
    /// Queue an intent without blocking. A full or closed queue drops it.
    pub fn send(&self, intent: AddTrackIntent) -> bool {
        match self.tx.try_send(intent) {
            Ok(()) => true,
            Err(TrySendError::Full(intent)) => {
                warn!(
                    "event queue full, dropped \"{}\" for slot {}",
                    intent.track.label, intent.destination
                );
                false
            }
            Err(TrySendError::Disconnected(intent)) => {
                warn!(
                    "playlist updates stopped, dropped \"{}\"",
                    intent.track.label
                );
                false
            }
        }
    }
}

/// Consumer side of the intent channel
#[derive(Debug)]
pub struct IntentReceiver {
    rx: Receiver<AddTrackIntent>,
}

impl IntentReceiver {
    /// Next intent, `None` once every sender is gone and the queue is empty
    pub fn recv(&self) -> Option<AddTrackIntent> {
        self.rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<AddTrackIntent> {
        self.rx.try_recv().ok()
    }
}

/// Create a bounded intent channel holding at most `depth` pending intents
pub fn intent_channel(depth: usize) -> (IntentSender, IntentReceiver) {
    let (tx, rx) = mpsc::sync_channel(depth.max(1));
    (IntentSender { tx }, IntentReceiver { rx })
}

type UiTask<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Work queued for the UI loop against a `T` it owns
pub struct UiQueue<T> {
    tx: Sender<UiTask<T>>,
    rx: Receiver<UiTask<T>>,
}

impl<T> UiQueue<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> UiHandle<T> {
        UiHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run every queued task against `target`, in order. Returns how many ran.
    pub fn drain(&self, target: &mut T) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task(target);
            ran += 1;
        }
        ran
    }
}

impl<T> Default for UiQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posts tasks to a [`UiQueue`] from any thread
pub struct UiHandle<T> {
    tx: Sender<UiTask<T>>,
}

impl<T> Clone for UiHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> UiHandle<T> {
    /// Returns false when the UI loop is gone
    pub fn post(&self, task: impl FnOnce(&mut T) + Send + 'static) -> bool {
        self.tx.send(Box::new(task)).is_ok()
    }
}

/// A playlist reachable from the artist tree by its slot character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSlot {
    /// Slot character, also the top-level node name in the playlist tree
    pub name: String,
    pub id: String,
    pub label: String,
}

/// Slots currently shown in the playlist tree
///
/// Refreshed whenever the playlist tree loads its top level.
#[derive(Debug, Clone, Default)]
pub struct SlotDirectory {
    slots: Arc<RwLock<Vec<PlaylistSlot>>>,
}

impl SlotDirectory {
    pub fn replace(&self, slots: Vec<PlaylistSlot>) {
        match self.slots.write() {
            Ok(mut guard) => *guard = slots,
            Err(poisoned) => *poisoned.into_inner() = slots,
        }
    }

    pub fn find(&self, name: &str) -> Option<PlaylistSlot> {
        let slots = match self.slots.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slots.iter().find(|s| s.name == name).cloned()
    }

    pub fn len(&self) -> usize {
        match self.slots.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What happened to one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Mutation done, display update queued
    Added,
    /// No playlist in that slot
    NoSlot,
    /// The mutation failed
    Failed,
}

/// Applies add-track intents for the playlist tree
pub struct IntentConsumer {
    slots: SlotDirectory,
    mutations: Arc<dyn MutationSource>,
    library: Arc<LibrarySnapshot>,
    /// Attached to the rows created for added tracks
    remove_action: Arc<dyn KeyAction>,
    ui: UiHandle<LazyTree>,
}

impl IntentConsumer {
    pub fn new(
        slots: SlotDirectory,
        mutations: Arc<dyn MutationSource>,
        library: Arc<LibrarySnapshot>,
        remove_action: Arc<dyn KeyAction>,
        ui: UiHandle<LazyTree>,
    ) -> Self {
        Self {
            slots,
            mutations,
            library,
            remove_action,
            ui,
        }
    }

    pub fn handle(&self, intent: AddTrackIntent) -> Delivery {
        let Some(slot) = self.slots.find(&intent.destination) else {
            debug!("no playlist in slot {}", intent.destination);
            return Delivery::NoSlot;
        };

        let track = intent.track;
        if let Err(e) = self.mutations.add_track(&slot.id, &track.id) {
            error!(
                "cannot add \"{}\" to {}: {}",
                track.label,
                destination_name(&slot.id),
                e
            );
            return Delivery::Failed;
        }
        if slot.id == LIBRARY_ID {
            self.library.remember(&track.id);
        }
        info!("added \"{}\" to {}", track.label, slot.label);

        let added = Node::new(track.name.clone(), track.name.clone(), track.id.clone())
            .with_highlight(Highlight::Added)
            .with_playlist(slot.id.clone())
            .with_key_action(Arc::clone(&self.remove_action));
        let slot_name = slot.name;
        self.ui.post(move |tree: &mut LazyTree| {
            if tree.reveal_added(&slot_name, added).is_none() {
                debug!("added track not shown under slot {}", slot_name);
            }
        });
        Delivery::Added
    }

    /// Process intents on a dedicated thread until every sender is dropped.
    /// The thread returns how many intents were applied.
    pub fn spawn(self, rx: IntentReceiver) -> io::Result<JoinHandle<usize>> {
        thread::Builder::new()
            .name("playlist-intents".to_string())
            .spawn(move || {
                let mut added = 0;
                while let Some(intent) = rx.recv() {
                    if self.handle(intent) == Delivery::Added {
                        added += 1;
                    }
                }
                debug!("playlist intent consumer stopped");
                added
            })
    }
}
