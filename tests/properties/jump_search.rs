//! Property tests for first-letter jump search.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use trackwalk::browser::{dispatch, expand_with, KeyOutcome, LazyTree, Node};

fn tree(names: Vec<String>) -> LazyTree {
    LazyTree::build(
        "ARTISTS",
        "Root",
        expand_with(move |_| {
            Ok(names
                .iter()
                .enumerate()
                .map(|(i, n)| Node::new(n.clone(), n.clone(), format!("AR{}", i)))
                .collect())
        }),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a letter lands on the first sibling starting with it, or
    /// leaves focus alone when none does.
    #[test]
    fn property_jump_lands_on_first_match(
        names in proptest::collection::vec("[A-Za-z][a-z]{0,5}", 1..10),
        start in 0usize..10,
        key in proptest::char::range('a', 'z'),
    ) {
        let mut t = tree(names.clone());
        let top = t.top_level().to_vec();
        let before = top[start % top.len()];
        t.set_current(before);

        let outcome = dispatch(&mut t, &KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        prop_assert_eq!(outcome, KeyOutcome::Consumed);

        let expected = names
            .iter()
            .position(|n| n.to_lowercase().starts_with(key))
            .map(|i| top[i])
            .unwrap_or(before);
        prop_assert_eq!(t.current(), expected);
    }
}
