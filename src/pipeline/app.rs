//! App - owns the tree, the screen and the text measurer.
//!
//! # Example
//!
//! ```ignore
//! use boxflow::{App, Config, DisplayList};
//!
//! let mut app = App::new(Config::default());
//! let root = app.tree().root();
//! let panel = app.tree_mut().create_box("panel");
//! app.tree_mut().append(root, panel);
//!
//! let mut list = DisplayList::new();
//! app.frame(&mut list);
//! ```

use crate::config::Config;
use crate::engine::Tree;
use crate::layout::{CellMeasure, TextMeasure};
use crate::renderer::Painter;
use crate::state::input::InputEvent;

/// Size of the drawable surface; the root is kept at this size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

pub struct App<M: TextMeasure = CellMeasure> {
    tree: Tree,
    screen: Screen,
    measure: M,
    config: Config,
    /// Last pointer position seen, for events that carry none.
    pointer: (f32, f32),
}

impl App<CellMeasure> {
    pub fn new(config: Config) -> Self {
        let measure = CellMeasure::new(config.cell_advance, config.line_height);
        Self::with_measure(config, measure)
    }
}

impl<M: TextMeasure> App<M> {
    pub fn with_measure(config: Config, measure: M) -> Self {
        let mut tree = Tree::new();
        tree.set_pointer_enabled(config.pointer_enabled);
        tree.set_scroll_enabled(config.scroll_enabled);

        let mut app = Self {
            tree,
            screen: Screen::default(),
            measure,
            pointer: (0.0, 0.0),
            config,
        };
        app.resize(app.config.screen_width as f32, app.config.screen_height as f32);
        app
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    /// Resize the screen and the root node with it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = Screen { width, height };
        let root = self.tree.root();
        if let Some(style) = self.tree.style_mut(root) {
            style.set_size(width, height);
        }
        tracing::debug!(width, height, "screen resized");
    }

    pub fn layout(&mut self) {
        self.tree.layout(&mut self.measure);
    }

    /// Lay out, then paint into `painter`.
    pub fn frame(&mut self, painter: &mut impl Painter) {
        self.layout();
        self.tree.paint(painter);
    }

    /// Route one decoded host event. Returns false for events that were ignored.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Move { x, y } | InputEvent::Enter { x, y } => {
                self.pointer = (x, y);
                self.tree.pointer_move(x, y);
            }
            InputEvent::LeaveWindow => {
                let (x, y) = self.pointer;
                self.tree.pointer_leave_window(x, y);
            }
            InputEvent::Down { button, x, y } => {
                self.pointer = (x, y);
                self.tree.pointer_down(button, x, y);
            }
            InputEvent::Up { button, x, y } => {
                self.pointer = (x, y);
                self.tree.pointer_up(button, x, y);
            }
            InputEvent::Scroll { dx, dy } => {
                let step = self.config.scroll_step;
                if dy != 0.0 {
                    self.tree.scroll_vertical(dy * step);
                }
                if dx != 0.0 {
                    self.tree.scroll_horizontal(dx * step);
                }
            }
            InputEvent::Resize { width, height } => self.resize(width as f32, height as f32),
            InputEvent::None => return false,
        }
        true
    }
}

impl Default for App<CellMeasure> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
