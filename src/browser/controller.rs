//! Lazy tree controller
//!
//! Owns a [`DisplayTree`] of [`Node`]s and grows it on demand: a node's
//! loader runs the first time the node is expanded, and the rows it
//! produced are reused on every later expansion.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::ui::theme;

use super::display::{DisplayTree, Navigation, RowId};
use super::node::{Expand, Highlight, Node};

/// What `expand_current` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Children were already materialized; nothing was loaded
    Reused,
    /// The loader ran and produced this many children
    Loaded(usize),
    /// The node has no loader
    Leaf,
    /// The loader failed; the node stays collapsed
    Failed,
}

pub struct LazyTree {
    display: DisplayTree<Node>,
}

impl LazyTree {
    /// Build a tree whose root lists the children produced by `loader`.
    ///
    /// The root row is not selectable. Its children are loaded right away
    /// and marked as top level. If that load fails the root stays empty and
    /// expanding it again retries.
    pub fn build(
        title: impl Into<String>,
        root_label: impl Into<String>,
        loader: Arc<dyn Expand>,
    ) -> Self {
        let root_label = root_label.into();
        let root = Node::labelled(root_label.clone())
            .with_expander(loader)
            .with_highlight(Highlight::Heading);

        let mut display = DisplayTree::new(title, root_label, root);
        let root_row = display.root();
        display.set_selectable(root_row, false);
        display.set_color(root_row, theme::highlight_color(Highlight::Heading));

        let mut tree = Self { display };
        tree.expand_row(root_row);
        if let Some(&first) = tree.top_level().first() {
            tree.display.set_current(first);
        }
        tree
    }

    pub fn display(&self) -> &DisplayTree<Node> {
        &self.display
    }

    pub fn title(&self) -> &str {
        self.display.title()
    }

    pub fn current(&self) -> RowId {
        self.display.current()
    }

    pub fn current_node(&self) -> &Node {
        self.display.reference(self.display.current())
    }

    pub fn node(&self, row: RowId) -> &Node {
        self.display.reference(row)
    }

    pub fn set_current(&mut self, row: RowId) {
        self.display.set_current(row);
    }

    /// Rows directly under the root
    pub fn top_level(&self) -> &[RowId] {
        self.display.children(self.display.root())
    }

    /// First top-level row whose node name equals `name`
    pub fn find_top_level(&self, name: &str) -> Option<RowId> {
        self.top_level()
            .iter()
            .copied()
            .find(|&row| self.display.reference(row).name == name)
    }

    /// Expand the focused row, loading its children on first use
    pub fn expand_current(&mut self) -> Expansion {
        self.expand_row(self.display.current())
    }

    fn expand_row(&mut self, row: RowId) -> Expansion {
        if !self.display.children(row).is_empty() {
            self.display.set_expanded(row, true);
            return Expansion::Reused;
        }

        let node = self.display.reference(row);
        let children = match node.load_children() {
            None => return Expansion::Leaf,
            Some(Ok(children)) => children,
            Some(Err(e)) => {
                error!("cannot expand \"{}\": {}", node.label, e);
                return Expansion::Failed;
            }
        };

        let top_level = row == self.display.root();
        let count = children.len();
        for mut child in children {
            if top_level {
                child.level = 1;
            }
            let child_row = self.wrap(child);
            self.display.add_child(row, child_row);
        }
        self.display.set_expanded(row, true);
        debug!("loaded {} children under \"{}\"", count, self.display.label(row));
        Expansion::Loaded(count)
    }

    /// Create a display row for `node`, colored by its highlight
    fn wrap(&mut self, node: Node) -> RowId {
        let label = node.label.clone();
        let highlight = node.meta.highlight;
        let row = self.display.add_node(label, node);
        if let Some(h) = highlight {
            self.display.set_color(row, theme::highlight_color(h));
        }
        row
    }

    /// Re-apply a node's highlight to its row
    pub fn apply_highlight(&mut self, row: RowId) {
        if let Some(h) = self.display.reference(row).meta.highlight {
            self.display.set_color(row, theme::highlight_color(h));
        }
    }

    /// Collapse the focused row; its children stay materialized
    pub fn collapse_current(&mut self) {
        let row = self.display.current();
        self.display.set_expanded(row, false);
    }

    /// Collapse every top-level subtree.
    ///
    /// Focus stays where it was when that row is still visible, otherwise
    /// it moves to the nearest visible ancestor.
    pub fn collapse_all(&mut self) {
        let focused = self.display.current();
        for row in self.top_level().to_vec() {
            self.display.collapse_all(row);
        }

        let mut target = focused;
        while !self.display.is_visible(target) {
            match self.display.parent(target) {
                Some(parent) => target = parent,
                None => break,
            }
        }
        self.display.set_current(target);
    }

    /// Move focus to the first top-level sibling whose name starts with
    /// `key`, compared case-insensitively. Only applies while a top-level
    /// row is focused. Returns true if focus moved.
    pub fn jump_to_initial(&mut self, key: char) -> bool {
        if !self.current_node().is_top_level() {
            return false;
        }
        info!("searching for items starting with {}", key.to_uppercase());

        let found = self.top_level().iter().copied().find(|&row| {
            self.display
                .reference(row)
                .name
                .chars()
                .next()
                .is_some_and(|c| c.to_lowercase().eq(key.to_lowercase()))
        });

        match found {
            Some(row) => {
                info!("found {}", self.display.label(row));
                self.display.set_current(row);
                true
            }
            None => false,
        }
    }

    /// Default up/down navigation of the widget
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        self.display.navigate(nav)
    }

    /// Route a character to the focused node's key action and refresh its
    /// color. Returns false when the node has no action.
    pub fn press_current(&mut self, key: char) -> bool {
        let row = self.display.current();
        if !self.display.reference_mut(row).press(key) {
            return false;
        }
        self.apply_highlight(row);
        true
    }

    /// Insert `node` as the first child of `parent` and return its row
    pub fn prepend_child(&mut self, parent: RowId, node: Node) -> RowId {
        let row = self.wrap(node);
        let mut children = Vec::with_capacity(self.display.children(parent).len() + 1);
        children.push(row);
        children.extend_from_slice(self.display.children(parent));
        self.display.set_children(parent, children);
        row
    }

    /// Show a track that was just added to the top-level entry `name`.
    ///
    /// Focuses the entry, expands it the same way a keypress would (loading
    /// it if this is the first expansion), puts `track` first among its
    /// children and focuses the new row. Returns `None` if no top-level
    /// entry carries that name, or if the entry could not be loaded; the
    /// entry then stays collapsed and unloaded so a later expand retries.
    pub fn reveal_added(&mut self, name: &str, track: Node) -> Option<RowId> {
        let parent = self.find_top_level(name)?;
        self.display.set_current(parent);
        if self.expand_current() == Expansion::Failed {
            warn!(
                "\"{}\" was added but {} could not be loaded",
                track.label,
                self.display.label(parent)
            );
            return None;
        }
        let row = self.prepend_child(parent, track);
        self.display.set_expanded(parent, true);
        self.display.set_current(row);
        Some(row)
    }
}
