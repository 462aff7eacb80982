//! Keybinding dispatch for a single tree

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::controller::LazyTree;
use super::display::Navigation;

/// Rows moved by PageUp / PageDown
pub const PAGE_ROWS: usize = 10;

/// Whether the tree handled a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    /// Not a tree binding; the host widget gets it
    PassThrough,
}

/// Handle a key pressed while `tree` has focus
pub fn dispatch(tree: &mut LazyTree, key: &KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char(c) if is_plain(key.modifiers) => {
            if tree.current_node().has_key_action() {
                tree.press_current(c);
            } else if tree.current_node().is_top_level() {
                tree.jump_to_initial(c);
            }
            KeyOutcome::Consumed
        }
        KeyCode::Left => {
            tree.collapse_current();
            KeyOutcome::Consumed
        }
        KeyCode::Right => {
            tree.expand_current();
            KeyOutcome::Consumed
        }
        KeyCode::Esc => {
            tree.collapse_all();
            KeyOutcome::Consumed
        }
        _ => KeyOutcome::PassThrough,
    }
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// Default widget navigation for a passed-through key
pub fn navigation_for(key: &KeyEvent) -> Option<Navigation> {
    match key.code {
        KeyCode::Up => Some(Navigation::Up),
        KeyCode::Down => Some(Navigation::Down),
        KeyCode::PageUp => Some(Navigation::PageUp(PAGE_ROWS)),
        KeyCode::PageDown => Some(Navigation::PageDown(PAGE_ROWS)),
        KeyCode::Home => Some(Navigation::Home),
        KeyCode::End => Some(Navigation::End),
        _ => None,
    }
}
