//! Scenario: Browse the artist tree
//!
//! Journey: the user jumps between followed artists by initial, drills
//! into albums and tracks, and collapses everything with Esc.
//!
//! Success Criteria:
//! - jump-search matches the first sibling by initial, ignoring "The "
//! - each loader runs once per materialization
//! - Esc collapses all and keeps focus on a visible row

use crossterm::event::KeyCode;
use trackwalk::browser::{Highlight, KeyOutcome};

use crate::common::*;

#[test]
fn scenario_jump_search_prefers_first_sibling() {
    let mut h = Harness::sample();
    let labels: Vec<_> = h
        .artists
        .top_level()
        .iter()
        .map(|r| h.artists.display().label(*r).to_string())
        .collect();
    assert_eq!(labels, vec!["ACDC", "Adele", "The Beatles"]);

    focus_top(&mut h.artists, "The Beatles");
    press_char(&mut h.artists, 'a');
    assert_eq!(h.artists.current_node().label, "ACDC");

    press_char(&mut h.artists, 'B');
    assert_eq!(h.artists.current_node().label, "The Beatles");

    // Nothing starts with "t" once the article is stripped
    press_char(&mut h.artists, 't');
    assert_eq!(h.artists.current_node().label, "The Beatles");
}

#[test]
fn scenario_drill_into_album_tracks() {
    let mut h = Harness::sample();
    focus_top(&mut h.artists, "The Beatles");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Albums");
    press(&mut h.artists, KeyCode::Right);
    let album = focus_child(&mut h.artists, "Help! - (1965-08-06)");
    press(&mut h.artists, KeyCode::Right);

    assert_eq!(
        child_labels(&h.artists, album),
        vec![" 1 - Help!", "13 - Yesterday"]
    );
    let yesterday = h.artists.display().children(album)[1];
    assert_eq!(
        h.artists.node(yesterday).meta.highlight,
        Some(Highlight::InLibrary)
    );

    // Letters below the top level are swallowed
    focus_child(&mut h.artists, " 1 - Help!");
    let row = h.artists.current();
    // Track rows carry an action, so the key becomes an intent instead
    assert_eq!(press_char(&mut h.artists, 'z'), KeyOutcome::Consumed);
    assert_eq!(h.artists.current(), row);
}

#[test]
fn scenario_collapse_all_with_escape() {
    let mut h = Harness::sample();
    let beatles = focus_top(&mut h.artists, "The Beatles");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "Related Artists");
    press(&mut h.artists, KeyCode::Right);
    focus_child(&mut h.artists, "ACDC");

    assert_eq!(press(&mut h.artists, KeyCode::Esc), KeyOutcome::Consumed);

    assert_eq!(h.artists.current(), beatles);
    assert!(!h.artists.display().is_expanded(beatles));

    // Re-expanding reuses the materialized categories
    press(&mut h.artists, KeyCode::Right);
    assert_eq!(
        child_labels(&h.artists, beatles),
        vec!["Popular Tracks", "Albums", "Related Artists"]
    );
}

#[test]
fn scenario_navigation_passes_through_to_widget() {
    let mut h = Harness::sample();
    assert_eq!(press(&mut h.artists, KeyCode::Down), KeyOutcome::PassThrough);
    assert_eq!(h.artists.current_node().label, "ACDC");
}
