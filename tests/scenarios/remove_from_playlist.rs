//! Scenario: Remove tracks from the playlist tree
//!
//! Journey: the user opens a playlist or the library and presses `x` on a
//! track.
//!
//! Success Criteria:
//! - the track is removed from the catalog
//! - the row stays where it was and is recolored
//! - removing from the library updates the library snapshot

use crossterm::event::KeyCode;
use trackwalk::browser::Highlight;
use trackwalk::ui::theme;

use crate::common::*;

#[test]
fn scenario_remove_recolors_playlist_row() {
    let mut h = Harness::sample();
    let road_trip = focus_top(&mut h.playlists, "b) Road Trip");
    press(&mut h.playlists, KeyCode::Right);
    let row = focus_child(&mut h.playlists, "ACDC - Thunderstruck");

    press_char(&mut h.playlists, 'x');

    assert_eq!(
        h.mutations.calls(),
        vec![Call::Remove("PL123".to_string(), "T3".to_string())]
    );
    assert_eq!(child_labels(&h.playlists, road_trip), vec!["ACDC - Thunderstruck"]);
    assert_eq!(h.playlists.node(row).meta.highlight, Some(Highlight::Removed));
    assert_eq!(
        h.playlists.display().color(row),
        Some(theme::highlight_color(Highlight::Removed))
    );
    assert!(h.catalog.snapshot().playlists[0].tracks.is_empty());
}

#[test]
fn scenario_remove_from_library() {
    let mut h = Harness::sample();
    focus_top(&mut h.playlists, "a) Library");
    press(&mut h.playlists, KeyCode::Right);
    let row = focus_child(&mut h.playlists, "The Beatles - Yesterday");
    assert_eq!(h.playlists.node(row).meta.playlist_id.as_deref(), Some(""));

    press_char(&mut h.playlists, 'x');

    assert_eq!(
        h.mutations.calls(),
        vec![Call::Remove(String::new(), "T2".to_string())]
    );
    assert_eq!(h.playlists.node(row).meta.highlight, Some(Highlight::Removed));
    assert!(!h.session.library.contains("T2"));
    assert!(h.catalog.snapshot().library.is_empty());
}

#[test]
fn scenario_second_remove_fails_without_change() {
    let mut h = Harness::sample();
    focus_top(&mut h.playlists, "b) Road Trip");
    press(&mut h.playlists, KeyCode::Right);
    let row = focus_child(&mut h.playlists, "ACDC - Thunderstruck");

    press_char(&mut h.playlists, 'x');
    press_char(&mut h.playlists, 'x');

    assert_eq!(h.mutations.calls().len(), 2);
    assert_eq!(h.playlists.node(row).meta.highlight, Some(Highlight::Removed));
}

#[test]
fn scenario_other_letters_do_nothing_on_tracks() {
    let mut h = Harness::sample();
    focus_top(&mut h.playlists, "b) Road Trip");
    press(&mut h.playlists, KeyCode::Right);
    let row = focus_child(&mut h.playlists, "ACDC - Thunderstruck");

    press_char(&mut h.playlists, 'c');

    assert!(h.mutations.calls().is_empty());
    assert_eq!(h.playlists.current(), row);
    assert_eq!(h.playlists.node(row).meta.highlight, None);
}
