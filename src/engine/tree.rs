//! Node Tree - Arena of nodes with generational handles.
//!
//! Manages the lifecycle of nodes:
//! - Slot allocation with a free pool for reuse
//! - Generation counters so stale handles never alias recycled slots
//! - Owned child lists plus plain parent ids
//! - Destroy hooks, run post-order when a subtree is released

use std::ops::{Index, IndexMut};

use super::handlers::MouseHandlers;
use super::node::{Node, NodeId, NodeKind};
use super::style::NodeStyle;
use crate::error::TreeError;
use crate::types::Rgba;

// =============================================================================
// Tree State
// =============================================================================

struct Slot {
    generation: u32,
    node: Option<Node>,
}

pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,

    /// Last node found under the pointer.
    pub(crate) hovered: Option<NodeId>,
    /// Node the current press started on.
    pub(crate) pressed: Option<NodeId>,
    pub(crate) mouse_down: bool,
    pub(crate) pointer_enabled: bool,
    pub(crate) scroll_enabled: bool,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only a transparent root named `"root"`.
    pub fn new() -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId { index: 0, generation: 0 },
            hovered: None,
            pressed: None,
            mouse_down: false,
            pointer_enabled: true,
            scroll_enabled: true,
        };
        let mut style = NodeStyle::default();
        style.set_color(Rgba::TRANSPARENT);
        tree.root = tree.insert(Node::new("root", NodeKind::Box, String::new(), style));
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // =========================================================================
    // Slot Allocation
    // =========================================================================

    fn insert(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId { index, generation: slot.generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, node: Some(node) });
            NodeId { index, generation: 0 }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        self.free.push(id.index);
        Some(node)
    }

    /// Number of live nodes, root included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create a detached box node with default style.
    pub fn create_box(&mut self, name: impl Into<String>) -> NodeId {
        self.create_box_with_style(name, NodeStyle::default())
    }

    pub fn create_box_with_style(&mut self, name: impl Into<String>, style: NodeStyle) -> NodeId {
        self.insert(Node::new(name, NodeKind::Box, String::new(), style))
    }

    /// Create a detached box and configure its style in place.
    pub fn create_box_with(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut NodeStyle),
    ) -> NodeId {
        let mut style = NodeStyle::default();
        configure(&mut style);
        self.create_box_with_style(name, style)
    }

    /// Create a detached text node (content sized, wrapping rows, black).
    pub fn create_text(&mut self, name: impl Into<String>, text: impl Into<String>) -> NodeId {
        self.insert(Node::new(name, NodeKind::Text, text.into(), NodeStyle::text()))
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    pub fn style(&self, id: NodeId) -> Option<&NodeStyle> {
        self.get(id).map(|n| &n.style)
    }

    pub fn style_mut(&mut self, id: NodeId) -> Option<&mut NodeStyle> {
        self.get_mut(id).map(|n| &mut n.style)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children in order; empty for stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Replace the text of a text node. Returns false for boxes and stale ids.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(node) if node.kind == NodeKind::Text => {
                node.text = text.into();
                true
            }
            _ => false,
        }
    }

    pub fn set_handlers(&mut self, id: NodeId, handlers: MouseHandlers) {
        if let Some(node) = self.get_mut(id) {
            node.handlers = handlers;
        }
    }

    pub fn handlers_mut(&mut self, id: NodeId) -> Option<&mut MouseHandlers> {
        self.get_mut(id).map(|n| &mut n.handlers)
    }

    /// Register a callback run once when `id` is destroyed.
    pub fn on_destroy(&mut self, id: NodeId, hook: impl FnOnce(NodeId, &Node) + 'static) {
        if let Some(node) = self.get_mut(id) {
            node.destroy_hooks.push(Box::new(hook));
        }
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { tree: self, next: self.parent(id) }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Append `child` as the last child of `parent`.
    ///
    /// Silently ignored (logged at debug) when [`Tree::try_append`] would fail.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if let Err(err) = self.try_append(parent, child) {
            tracing::debug!(%err, "append ignored");
        }
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn try_append(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.get(parent).ok_or(TreeError::StaleNode(parent))?;
        if parent_node.kind == NodeKind::Text {
            return Err(TreeError::TextParent(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::StaleNode(child));
        }
        if child == self.root {
            return Err(TreeError::RootChild);
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(TreeError::Cycle { parent, child });
        }

        self.detach(child);
        self[parent].children.push(child);
        self[child].parent = Some(parent);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(node) = self.get_mut(parent) {
            node.children.retain(|&c| c != id);
        }
        self[id].parent = None;
    }

    /// Detach and destroy `id` together with its subtree.
    ///
    /// Silently ignored (logged at debug) when [`Tree::try_remove`] would fail.
    pub fn remove(&mut self, id: NodeId) {
        if let Err(err) = self.try_remove(id) {
            tracing::debug!(%err, "remove ignored");
        }
    }

    /// Detach and destroy `id` together with its subtree. Hooks run
    /// post-order, `id` last.
    pub fn try_remove(&mut self, id: NodeId) -> Result<(), TreeError> {
        if !self.contains(id) {
            return Err(TreeError::StaleNode(id));
        }
        if id == self.root {
            return Err(TreeError::RootChild);
        }
        self.detach(id);
        self.destroy_subtree(id);
        self.destroy_node(id);
        Ok(())
    }

    /// Release every descendant of `id`, children before parents, then clear
    /// its child list. `id` itself stays alive.
    pub fn destroy_subtree(&mut self, id: NodeId) {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self.children(next).iter().copied());
        }

        // Reversed pre-order puts every node after all of its descendants.
        for &node in order.iter().rev() {
            self.destroy_node(node);
        }
        if let Some(node) = self.get_mut(id) {
            node.children.clear();
        }
    }

    fn destroy_node(&mut self, id: NodeId) {
        let Some(mut node) = self.release(id) else {
            return;
        };
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.pressed == Some(id) {
            self.pressed = None;
        }
        let hooks = std::mem::take(&mut node.destroy_hooks);
        for hook in hooks {
            hook(id, &node);
        }
        tracing::trace!(name = %node.name, "node destroyed");
    }

    /// Destroy everything below the root and reset the pointer state.
    pub fn clear(&mut self) {
        let root = self.root;
        self.destroy_subtree(root);
        self.hovered = None;
        self.pressed = None;
        self.mouse_down = false;
    }

    // =========================================================================
    // Debug
    // =========================================================================

    /// One line per node, indented by depth.
    pub fn tree_repr(&self) -> String {
        let mut out = String::new();
        self.dfs_with_level(self.root, |_, node, level| {
            out.push_str(&"|  ".repeat(level));
            out.push_str(&node.name);
            if node.is_text() {
                out.push_str(&format!(" {:?}", node.text));
            }
            out.push('\n');
            crate::types::Traverse::Continue
        });
        out
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    /// Panics on a stale id, like slice indexing out of bounds.
    fn index(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node id {id:?}"),
        }
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node id {id:?}"),
        }
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("hovered", &self.hovered)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

// =============================================================================
// TESTS
// =============================================================================
