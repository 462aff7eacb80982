//! Display tree widget
//!
//! An arena of display rows, each wrapping a reference payload. This is the
//! host side of the browser: labels, colors, selectability, expansion
//! state, the focused row and default up/down navigation. It knows nothing
//! about loading; the lazy controller decides what goes in.

use crossterm::style::Color;

/// Handle to a row in a [`DisplayTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(usize);

#[derive(Debug, Clone)]
struct DisplayNode<R> {
    label: String,
    reference: R,
    color: Option<Color>,
    selectable: bool,
    expanded: bool,
    parent: Option<RowId>,
    children: Vec<RowId>,
}

/// A row as it appears on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: RowId,
    /// 0 for the root
    pub depth: usize,
}

/// Default navigation the widget performs for keys nobody consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Up,
    Down,
    PageUp(usize),
    PageDown(usize),
    Home,
    End,
}

#[derive(Debug, Clone)]
pub struct DisplayTree<R> {
    title: String,
    nodes: Vec<DisplayNode<R>>,
    root: RowId,
    current: RowId,
}

impl<R> DisplayTree<R> {
    /// Create a tree with an expanded root row
    pub fn new(title: impl Into<String>, root_label: impl Into<String>, root: R) -> Self {
        let mut tree = Self {
            title: title.into(),
            nodes: Vec::new(),
            root: RowId(0),
            current: RowId(0),
        };
        let root = tree.add_node(root_label, root);
        tree.nodes[root.0].expanded = true;
        tree
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> RowId {
        self.root
    }

    /// Create a detached, selectable row
    pub fn add_node(&mut self, label: impl Into<String>, reference: R) -> RowId {
        let id = RowId(self.nodes.len());
        self.nodes.push(DisplayNode {
            label: label.into(),
            reference,
            color: None,
            selectable: true,
            expanded: false,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: RowId) -> &DisplayNode<R> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: RowId) -> &mut DisplayNode<R> {
        &mut self.nodes[id.0]
    }

    pub fn label(&self, id: RowId) -> &str {
        &self.node(id).label
    }

    pub fn reference(&self, id: RowId) -> &R {
        &self.node(id).reference
    }

    pub fn reference_mut(&mut self, id: RowId) -> &mut R {
        &mut self.node_mut(id).reference
    }

    pub fn color(&self, id: RowId) -> Option<Color> {
        self.node(id).color
    }

    pub fn set_color(&mut self, id: RowId, color: Color) {
        self.node_mut(id).color = Some(color);
    }

    pub fn is_selectable(&self, id: RowId) -> bool {
        self.node(id).selectable
    }

    pub fn set_selectable(&mut self, id: RowId, selectable: bool) {
        self.node_mut(id).selectable = selectable;
    }

    pub fn is_expanded(&self, id: RowId) -> bool {
        self.node(id).expanded
    }

    pub fn set_expanded(&mut self, id: RowId, expanded: bool) {
        self.node_mut(id).expanded = expanded;
    }

    pub fn children(&self, id: RowId) -> &[RowId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: RowId) -> Option<RowId> {
        self.node(id).parent
    }

    pub fn add_child(&mut self, parent: RowId, child: RowId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Replace the children list of `parent`
    pub fn set_children(&mut self, parent: RowId, children: Vec<RowId>) {
        for &child in &children {
            self.node_mut(child).parent = Some(parent);
        }
        self.node_mut(parent).children = children;
    }

    /// Collapse `id` and every descendant
    pub fn collapse_all(&mut self, id: RowId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let node = self.node_mut(next);
            node.expanded = false;
            stack.extend(node.children.iter().copied());
        }
    }

    pub fn current(&self) -> RowId {
        self.current
    }

    pub fn set_current(&mut self, id: RowId) {
        self.current = id;
    }

    /// Distance from the root
    pub fn depth(&self, id: RowId) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent(id);
        while let Some(p) = cursor {
            depth += 1;
            cursor = self.parent(p);
        }
        depth
    }

    /// True when every ancestor of `id` is expanded
    pub fn is_visible(&self, id: RowId) -> bool {
        let mut cursor = self.parent(id);
        while let Some(p) = cursor {
            if !self.is_expanded(p) {
                return false;
            }
            cursor = self.parent(p);
        }
        id == self.root || self.parent(id).is_some()
    }

    /// Rows in display order (depth-first, expanded subtrees only)
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            rows.push(VisibleRow { id, depth });
            let node = self.node(id);
            if node.expanded {
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        rows
    }

    /// Move focus among visible, selectable rows. Returns true if it moved.
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        let rows = self.visible_rows();
        if rows.is_empty() {
            return false;
        }
        let pos = rows
            .iter()
            .position(|r| r.id == self.current)
            .unwrap_or(0);
        let last = rows.len() - 1;

        let target = match nav {
            Navigation::Up => self.find_selectable(&rows, pos, Direction::Back, true),
            Navigation::Down => self.find_selectable(&rows, pos, Direction::Forward, true),
            Navigation::PageUp(n) => {
                let start = pos.saturating_sub(n.max(1));
                self.find_selectable(&rows, start, Direction::Back, false)
                    .or_else(|| self.find_selectable(&rows, start, Direction::Forward, false))
            }
            Navigation::PageDown(n) => {
                let start = (pos + n.max(1)).min(last);
                self.find_selectable(&rows, start, Direction::Forward, false)
                    .or_else(|| self.find_selectable(&rows, start, Direction::Back, false))
            }
            Navigation::Home => self.find_selectable(&rows, 0, Direction::Forward, false),
            Navigation::End => self.find_selectable(&rows, last, Direction::Back, false),
        };

        match target {
            Some(id) if id != self.current => {
                self.current = id;
                true
            }
            _ => false,
        }
    }

    fn find_selectable(
        &self,
        rows: &[VisibleRow],
        from: usize,
        direction: Direction,
        skip_start: bool,
    ) -> Option<RowId> {
        let selectable = |i: &usize| self.is_selectable(rows[*i].id);
        match direction {
            Direction::Forward => {
                let start = if skip_start { from + 1 } else { from };
                (start..rows.len()).find(selectable).map(|i| rows[i].id)
            }
            Direction::Back => {
                let end = if skip_start { from } else { from + 1 };
                (0..end).rev().find(selectable).map(|i| rows[i].id)
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root > [a > [a1, a2], b]
    fn sample() -> (DisplayTree<&'static str>, [RowId; 4]) {
        let mut tree = DisplayTree::new("T", "Root", "root");
        let root = tree.root();
        tree.set_selectable(root, false);
        let a = tree.add_node("A", "a");
        let a1 = tree.add_node("A1", "a1");
        let a2 = tree.add_node("A2", "a2");
        let b = tree.add_node("B", "b");
        tree.add_child(root, a);
        tree.add_child(root, b);
        tree.set_children(a, vec![a1, a2]);
        (tree, [a, a1, a2, b])
    }

    fn labels(tree: &DisplayTree<&'static str>) -> Vec<String> {
        tree.visible_rows()
            .iter()
            .map(|r| format!("{}{}", "-".repeat(r.depth), tree.label(r.id)))
            .collect()
    }

    #[test]
    fn visible_rows_follow_expansion() {
        let (mut tree, [a, ..]) = sample();
        assert_eq!(labels(&tree), vec!["Root", "-A", "-B"]);

        tree.set_expanded(a, true);
        assert_eq!(labels(&tree), vec!["Root", "-A", "--A1", "--A2", "-B"]);
    }

    #[test]
    fn navigation_skips_unselectable_root() {
        let (mut tree, [a, _, _, b]) = sample();
        tree.set_current(tree.root());

        assert!(tree.navigate(Navigation::Down));
        assert_eq!(tree.current(), a);
        assert!(tree.navigate(Navigation::Down));
        assert_eq!(tree.current(), b);
        assert!(!tree.navigate(Navigation::Down));

        assert!(tree.navigate(Navigation::Up));
        assert!(!tree.navigate(Navigation::Up));
        assert_eq!(tree.current(), a);
    }

    #[test]
    fn home_end_and_paging() {
        let (mut tree, [a, a1, a2, b]) = sample();
        tree.set_expanded(a, true);
        tree.set_current(a);

        tree.navigate(Navigation::End);
        assert_eq!(tree.current(), b);
        tree.navigate(Navigation::Home);
        assert_eq!(tree.current(), a);
        tree.navigate(Navigation::PageDown(2));
        assert_eq!(tree.current(), a2);
        tree.navigate(Navigation::PageUp(10));
        assert_eq!(tree.current(), a);
        tree.navigate(Navigation::Down);
        assert_eq!(tree.current(), a1);
    }

    #[test]
    fn collapse_all_reaches_descendants() {
        let (mut tree, [a, a1, ..]) = sample();
        tree.set_expanded(a, true);
        tree.set_expanded(a1, true);

        tree.collapse_all(a);

        assert!(!tree.is_expanded(a));
        assert!(!tree.is_expanded(a1));
        assert_eq!(tree.children(a).len(), 2, "children stay materialized");
    }

    #[test]
    fn depth_and_visibility() {
        let (mut tree, [a, a1, _, b]) = sample();
        assert_eq!(tree.depth(tree.root()), 0);
        assert_eq!(tree.depth(a1), 2);
        assert!(tree.is_visible(b));
        assert!(!tree.is_visible(a1));
        tree.set_expanded(a, true);
        assert!(tree.is_visible(a1));
    }

    #[test]
    fn detached_rows_are_not_visible() {
        let (mut tree, _) = sample();
        let loose = tree.add_node("Loose", "loose");
        assert!(!tree.is_visible(loose));
    }

    #[test]
    fn set_children_reparents() {
        let (mut tree, [a, a1, a2, b]) = sample();
        tree.set_children(b, vec![a2, a1]);
        assert_eq!(tree.parent(a1), Some(b));
        assert_eq!(tree.children(b), &[a2, a1]);
        // `a` still lists them; callers move rows, they do not share them
        assert_eq!(tree.children(a).len(), 2);
    }
}
