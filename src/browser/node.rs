//! Navigation node model
//!
//! A [`Node`] is the payload carried by every display row. Behaviour is
//! attached through two independent capabilities:
//!
//! - [`Expand`] - the node can produce children on demand
//! - [`KeyAction`] - the node intercepts character keys
//!
//! Either, both or neither may be present.

use std::fmt;
use std::sync::Arc;

use crate::error::CatalogResult;

/// Highlight decided when a node is built or after a key action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Tree root / heading
    Heading,
    /// Track already saved in the user's library
    InLibrary,
    /// Track just added to a playlist
    Added,
    /// Track removed from its playlist
    Removed,
}

/// Typed node metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMeta {
    pub highlight: Option<Highlight>,
    /// Playlist the track was listed under; empty for the library
    pub playlist_id: Option<String>,
}

/// Produces the ordered children of a node
pub trait Expand: Send + Sync {
    fn children(&self, node: &Node) -> CatalogResult<Vec<Node>>;
}

impl<F> Expand for F
where
    F: Fn(&Node) -> CatalogResult<Vec<Node>> + Send + Sync,
{
    fn children(&self, node: &Node) -> CatalogResult<Vec<Node>> {
        self(node)
    }
}

/// Wrap a closure as an [`Expand`] capability
pub fn expand_with<F>(f: F) -> Arc<dyn Expand>
where
    F: Fn(&Node) -> CatalogResult<Vec<Node>> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Handles a character key pressed while the node is focused
pub trait KeyAction: Send + Sync {
    fn on_key(&self, node: &mut Node, key: char);
}

#[derive(Clone, Default)]
pub struct Node {
    pub name: String,
    pub label: String,
    pub id: String,
    /// 1 for direct children of the root, 0 everywhere else
    pub level: u8,
    pub meta: NodeMeta,
    expander: Option<Arc<dyn Expand>>,
    key_action: Option<Arc<dyn KeyAction>>,
}

impl Node {
    pub fn new(name: impl Into<String>, label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Node whose name doubles as its label
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label, "")
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_expander(mut self, expander: Arc<dyn Expand>) -> Self {
        self.expander = Some(expander);
        self
    }

    pub fn with_key_action(mut self, action: Arc<dyn KeyAction>) -> Self {
        self.key_action = Some(action);
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.meta.highlight = Some(highlight);
        self
    }

    pub fn with_playlist(mut self, playlist_id: impl Into<String>) -> Self {
        self.meta.playlist_id = Some(playlist_id.into());
        self
    }

    pub fn is_expandable(&self) -> bool {
        self.expander.is_some()
    }

    pub fn has_key_action(&self) -> bool {
        self.key_action.is_some()
    }

    pub fn is_top_level(&self) -> bool {
        self.level == 1
    }

    /// Run the children loader, `None` when the node has none
    pub fn load_children(&self) -> Option<CatalogResult<Vec<Node>>> {
        self.expander.as_ref().map(|e| e.children(self))
    }

    /// Route a key to the node's action. Returns false without an action.
    pub fn press(&mut self, key: char) -> bool {
        match self.key_action.clone() {
            Some(action) => {
                action.on_key(self, key);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("id", &self.id)
            .field("level", &self.level)
            .field("meta", &self.meta)
            .field("expandable", &self.is_expandable())
            .field("key_action", &self.has_key_action())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Mark;

    impl KeyAction for Mark {
        fn on_key(&self, node: &mut Node, key: char) {
            if key == 'm' {
                node.meta.highlight = Some(Highlight::Added);
            }
        }
    }

    #[test]
    fn capabilities_are_independent() {
        let leaf = Node::new("a", "A", "1");
        assert!(!leaf.is_expandable());
        assert!(!leaf.has_key_action());

        let both = Node::new("b", "B", "2")
            .with_expander(expand_with(|_| Ok(Vec::new())))
            .with_key_action(Arc::new(Mark));
        assert!(both.is_expandable());
        assert!(both.has_key_action());
    }

    #[test]
    fn load_children_passes_the_node() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let node = Node::new("n", "N", "parent-id").with_expander(expand_with(move |n| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Node::new("c", "child of", n.id.clone())])
        }));

        let children = node.load_children().unwrap().unwrap();
        assert_eq!(children[0].id, "parent-id");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Node::labelled("x").load_children().is_none());
    }

    #[test]
    fn press_routes_to_action() {
        let mut node = Node::labelled("t").with_key_action(Arc::new(Mark));
        assert!(node.press('z'));
        assert_eq!(node.meta.highlight, None);
        assert!(node.press('m'));
        assert_eq!(node.meta.highlight, Some(Highlight::Added));

        let mut plain = Node::labelled("p");
        assert!(!plain.press('m'));
    }

    #[test]
    fn clones_share_capabilities() {
        let node = Node::labelled("t").with_key_action(Arc::new(Mark));
        let copy = node.clone();
        assert!(copy.has_key_action());
        assert_eq!(copy.label, "t");
    }
}
