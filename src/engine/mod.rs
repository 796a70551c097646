//! Engine - Node arena, style model and traversals.
//!
//! The engine manages the core data structures:
//! - Tree: generational arena owning every node
//! - Node: label, content kind, style, output, interaction flags
//! - NodeStyle: per-node configuration read by layout
//! - MouseHandlers: optional per-node pointer callbacks
//!
//! # Ownership
//!
//! ```text
//! root (Box)
//! ├── header (Box, Row)
//! │   └── title (Text)
//! └── list (Box, Col, vscroll)
//! ```
//!
//! Parents own ordered child id lists; children hold a plain parent id.
//! Ownership is never reconstructed from the parent link.

mod handlers;
mod node;
mod style;
mod traverse;
mod tree;

pub use handlers::*;
pub use node::*;
pub use style::*;
pub use tree::*;
