//! # boxflow
//!
//! Retained-mode UI tree with box-flow layout and pointer dispatch.
//!
//! ## Architecture
//!
//! Nodes live in a generational arena owned by [`Tree`]. Each node carries a
//! [`NodeStyle`] written by the application and a [`NodeOutput`] written by
//! layout. A frame runs:
//!
//! ```text
//! Tree::layout (5 passes + transform sweep) → Tree::paint → Painter
//! host input → InputEvent → App::handle → hit test → handlers
//! ```
//!
//! Text metrics come from a [`TextMeasure`] implementation; [`CellMeasure`]
//! is the monospace default. Nothing is drawn by the crate itself.
//!
//! ## Modules
//!
//! - [`types`] - Core value types (Dimension, Rgba, FlexDir, etc.)
//! - [`engine`] - Node arena, style model, handlers, traversals
//! - [`layout`] - Box-flow layout passes and text measurement
//! - [`state`] - Hit testing, pointer and scroll dispatch, crossterm input
//! - [`renderer`] - Painter trait and display list
//! - [`pipeline`] - Application context
//! - [`config`] - TOML-backed settings

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::Config;
pub use error::{ConfigError, TreeError};

pub use engine::{
    Ancestors, DestroyHook, MouseHandlers, MouseState, Node, NodeId, NodeKind, NodeStyle,
    NotifyHandler, BubbleHandler, PointerEvent, Tree, edges,
};

pub use layout::{CellMeasure, FlexLine, NodeOutput, TextMeasure, string_width, wrap_text};

pub use pipeline::{App, Screen};

pub use renderer::{DisplayList, DrawCommand, Painter, TextRun};

pub use state::input;
pub use state::input::InputEvent;
