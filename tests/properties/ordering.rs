//! Property tests for catalog ordering.

use proptest::prelude::*;

use trackwalk::domain::ordering::{name_key, sort_albums, sort_artists};
use trackwalk::domain::{Album, AlbumType, Artist};

fn artist_name() -> impl Strategy<Value = String> {
    let word = || proptest::string::string_regex("[A-Za-z]{1,8}").unwrap();
    prop_oneof![
        word(),
        word().prop_map(|w| format!("The {}", w)),
        word().prop_map(|w| format!("the {}", w)),
    ]
}

fn release_date() -> impl Strategy<Value = String> {
    prop_oneof![
        (1950u32..2030).prop_map(|y| y.to_string()),
        (1950u32..2030, 1u32..=12).prop_map(|(y, m)| format!("{}-{:02}", y, m)),
        (1950u32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{}-{:02}-{:02}", y, m, d)),
        Just("unknown".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only the literal "The " prefix is stripped, and only once.
    #[test]
    fn property_name_key_strips_one_literal_article(name in artist_name()) {
        let key = name_key(&name);
        if let Some(rest) = name.strip_prefix("The ") {
            prop_assert_eq!(key, rest);
        } else {
            prop_assert_eq!(key, name.as_str());
        }
        prop_assert!(name.ends_with(key));
    }

    /// PROPERTY: sorted artists are ordered by key and nothing is lost.
    #[test]
    fn property_sort_artists_orders_by_key(
        names in proptest::collection::vec(artist_name(), 0..12)
    ) {
        let mut artists: Vec<Artist> = names
            .iter()
            .enumerate()
            .map(|(i, n)| Artist { id: format!("AR{}", i), name: n.clone() })
            .collect();
        sort_artists(&mut artists);

        prop_assert_eq!(artists.len(), names.len());
        for pair in artists.windows(2) {
            prop_assert!(name_key(&pair[0].name) <= name_key(&pair[1].name));
        }
    }

    /// PROPERTY: dated releases always precede undated ones.
    #[test]
    fn property_undated_albums_sort_last(
        dates in proptest::collection::vec(release_date(), 0..12)
    ) {
        let mut albums: Vec<Album> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| Album {
                id: format!("AL{}", i),
                name: format!("Album {}", i),
                release_date: d.clone(),
                album_type: AlbumType::Album,
            })
            .collect();
        sort_albums(&mut albums);

        let first_undated = albums
            .iter()
            .position(|a| a.release_date == "unknown")
            .unwrap_or(albums.len());
        prop_assert!(albums[first_undated..].iter().all(|a| a.release_date == "unknown"));
    }
}
