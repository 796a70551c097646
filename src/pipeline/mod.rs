//! Frame Pipeline
//!
//! Connects host input and output to the tree.
//!
//! ```text
//! host event → InputEvent → App::handle → dispatch
//! App::frame → Tree::layout → Tree::paint → Painter
//! ```
//!
//! Layout must run before hit testing or painting in the same frame.
//! [`App::frame`] does both in order.

pub mod app;

pub use app::{App, Screen};
