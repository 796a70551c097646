//! Renderer Module - paint traversal over the laid-out tree.
//!
//! The crate draws nothing itself. [`Tree::paint`](crate::Tree::paint) walks
//! the tree and calls into a [`Painter`]; [`DisplayList`] records those calls
//! for hosts that rasterize later.

mod paint;

pub use paint::{DisplayList, DrawCommand, Painter, TextRun};
