//! Scenario: Add a track to a playlist from the artist tree
//!
//! Journey: the user opens an artist's popular tracks, focuses a track and
//! presses the slot character of a playlist.
//!
//! Success Criteria:
//! - exactly one add call with the playlist id and track id
//! - the playlist is expanded and the track is its first, focused child
//! - an unknown slot does nothing

use crossterm::event::KeyCode;
use trackwalk::browser::{Delivery, Highlight, KeyOutcome};

use crate::common::*;

/// Walk to "Help!" under The Beatles > Popular Tracks
fn focus_help(h: &mut Harness) {
    focus_top(&mut h.artists, "The Beatles");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Popular Tracks");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Help! - Help!");
}

#[test]
fn scenario_track_lands_first_in_slot_b() {
    let mut h = Harness::sample();
    focus_help(&mut h);

    assert_eq!(press_char(&mut h.artists, 'b'), KeyOutcome::Consumed);
    assert_eq!(h.pump(), 1);

    assert_eq!(
        h.mutations.calls(),
        vec![Call::Add("PL123".to_string(), "T1".to_string())]
    );

    let road_trip = h.playlists.find_top_level("b").unwrap();
    assert!(h.playlists.display().is_expanded(road_trip));
    let first = h.playlists.display().children(road_trip)[0];
    assert_eq!(h.playlists.current(), first);

    let node = h.playlists.node(first);
    assert_eq!(node.id, "T1");
    assert_eq!(node.meta.highlight, Some(Highlight::Added));
    assert_eq!(node.meta.playlist_id.as_deref(), Some("PL123"));

    // The existing track was loaded through the normal expansion path
    assert!(child_labels(&h.playlists, road_trip).contains(&"ACDC - Thunderstruck".to_string()));
    assert_eq!(h.catalog.snapshot().playlists[0].tracks, vec!["T3", "T1"]);
}

#[test]
fn scenario_added_track_can_be_removed_again() {
    let mut h = Harness::sample();
    focus_help(&mut h);
    press_char(&mut h.artists, 'c');
    h.pump();

    let added = h.playlists.current();
    assert_eq!(press_char(&mut h.playlists, 'x'), KeyOutcome::Consumed);

    assert_eq!(h.playlists.node(added).meta.highlight, Some(Highlight::Removed));
    assert_eq!(
        h.mutations.calls(),
        vec![
            Call::Add("PL456".to_string(), "T1".to_string()),
            Call::Remove("PL456".to_string(), "T1".to_string()),
        ]
    );
}

#[test]
fn scenario_unknown_slot_is_dropped() {
    let mut h = Harness::sample();
    focus_help(&mut h);
    let before = h.playlists.current();

    press_char(&mut h.artists, 'z');
    let intent = h.receiver.try_recv().unwrap();
    assert_eq!(h.consumer.handle(intent), Delivery::NoSlot);

    assert_eq!(h.tasks.drain(&mut h.playlists), 0);
    assert!(h.mutations.calls().is_empty());
    assert_eq!(h.playlists.current(), before);
}

#[test]
fn scenario_adding_to_library_highlights_it_elsewhere() {
    let mut h = Harness::sample();
    focus_top(&mut h.artists, "ACDC");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Popular Tracks");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Thunderstruck - The Razors Edge");

    press_char(&mut h.artists, 'a');
    assert_eq!(h.pump(), 1);

    assert!(h.session.library.contains("T3"));
    let library = h.playlists.find_top_level("a").unwrap();
    assert_eq!(h.playlists.node(h.playlists.current()).id, "T3");
    assert_eq!(
        h.playlists.node(h.playlists.display().children(library)[0]).meta.playlist_id.as_deref(),
        Some("")
    );
}

#[test]
fn scenario_duplicate_library_add_fails_quietly() {
    let mut h = Harness::sample();
    focus_top(&mut h.artists, "The Beatles");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Popular Tracks");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Yesterday - Help!");

    press_char(&mut h.artists, 'a');
    assert_eq!(h.pump(), 0);
    assert_eq!(h.mutations.calls().len(), 1);
    assert_eq!(h.catalog.snapshot().library, vec!["T2"]);
}
