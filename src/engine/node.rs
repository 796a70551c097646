//! Node - one element of the tree: label, content, style, derived output,
//! interaction flags and handlers.

use bitflags::bitflags;

use super::handlers::MouseHandlers;
use super::style::NodeStyle;
use crate::layout::output::NodeOutput;

/// Generational arena handle.
///
/// A handle to a destroyed node stays distinguishable from the node that
/// later reuses its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Slot index (stable for the node's lifetime).
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

bitflags! {
    /// Pointer interaction state of a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseState: u8 {
        /// The pointer is within the node's hit area.
        const INSIDE = 1 << 0;
        /// The node is on the hovered chain.
        const OVER = 1 << 1;
        /// A press started on this node.
        const DOWN = 1 << 2;
    }
}

/// Content kind, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Box,
    Text,
}

/// Callback run once when its node is destroyed.
pub type DestroyHook = Box<dyn FnOnce(NodeId, &Node)>;

pub struct Node {
    pub name: String,
    pub(crate) kind: NodeKind,
    pub(crate) text: String,
    pub style: NodeStyle,
    pub(crate) output: NodeOutput,
    pub(crate) mouse: MouseState,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) handlers: MouseHandlers,
    pub(crate) destroy_hooks: Vec<DestroyHook>,
}

impl Node {
    pub(crate) fn new(
        name: impl Into<String>,
        kind: NodeKind,
        text: String,
        style: NodeStyle,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            text,
            style,
            output: NodeOutput::from_style(style),
            mouse: MouseState::empty(),
            parent: None,
            children: Vec::new(),
            handlers: MouseHandlers::default(),
            destroy_hooks: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Text payload; empty for boxes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Result of the last layout.
    pub fn output(&self) -> &NodeOutput {
        &self.output
    }

    pub fn mouse(&self) -> MouseState {
        self.mouse
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn handlers(&self) -> &MouseHandlers {
        &self.handlers
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("mouse", &self.mouse)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
