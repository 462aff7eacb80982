//! Catalog ordering rules
//!
//! Sources return children already sorted; these are the orderings they
//! apply. The tree never re-sorts what a loader hands it.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::catalog::{Album, Artist, Track};

/// Leading article ignored when ordering and searching artist names
const ARTICLE: &str = "The ";

/// Sort/search key for an artist name.
///
/// Only the literal, case-sensitive prefix `"The "` is stripped, once.
pub fn name_key(name: &str) -> &str {
    name.strip_prefix(ARTICLE).unwrap_or(name)
}

/// Order artists by name, ignoring a leading "The "
pub fn sort_artists(artists: &mut [Artist]) {
    artists.sort_by(|a, b| name_key(&a.name).cmp(name_key(&b.name)));
}

/// Order albums by release date, oldest first
pub fn sort_albums(albums: &mut [Album]) {
    albums.sort_by(|a, b| compare_release(&a.release_date, &b.release_date));
}

/// Sort key for playlist and library tracks: the primary artist (without
/// "The ") directly followed by the track name, no separator
pub fn track_key(track: &Track) -> String {
    format!("{}{}", name_key(track.primary_artist()), track.name)
}

/// Order tracks by [`track_key`]
pub fn sort_tracks_by_artist(tracks: &mut [Track]) {
    tracks.sort_by_cached_key(track_key);
}

/// Parse a release date with day or month precision.
///
/// Missing components default to the first of the period.
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d").ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01-01", date), "%Y-%m-%d").ok())
}

fn compare_release(a: &str, b: &str) -> Ordering {
    match (parse_release_date(a), parse_release_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        // Undated releases go last
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
