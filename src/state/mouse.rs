//! Mouse Module - pointer event dispatch.
//!
//! Hover, press and click state lives on the nodes as [`MouseState`] flags;
//! the tree tracks which node is hovered and which one a press started on.
//!
//! # API
//!
//! - `pointer_move(x, y)` - Update hover state, fire enter/leave/over/out
//! - `pointer_leave_window(x, y)` - Pointer left the window
//! - `pointer_down(button, x, y)` - Press on the hovered node
//! - `pointer_up(button, x, y)` - Release, fire click in/out
//! - `hovered`, `pressed`, `is_mouse_down` - Dispatcher state
//!
//! # Example
//!
//! ```ignore
//! use boxflow::{MouseHandlers, Tree};
//! use std::rc::Rc;
//!
//! tree.set_handlers(button, MouseHandlers {
//!     on_click_in: Some(Rc::new(|_tree, event| {
//!         println!("clicked at ({}, {})", event.x, event.y);
//!         false // stop bubbling
//!     })),
//!     ..Default::default()
//! });
//! tree.pointer_down(MouseButton::Left, 10.0, 10.0);
//! tree.pointer_up(MouseButton::Left, 10.0, 10.0);
//! ```

use crate::engine::{Bubble, MouseState, NodeId, Notify, PointerEvent, Tree};
use crate::types::{MouseButton, Traverse};

impl Tree {
    // =========================================================================
    // STATE
    // =========================================================================

    /// Node under the pointer after the last move.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Node the current press started on.
    pub fn pressed(&self) -> Option<NodeId> {
        self.pressed
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn pointer_enabled(&self) -> bool {
        self.pointer_enabled
    }

    /// Gate move, down and up dispatch. An up still runs while a button is held.
    pub fn set_pointer_enabled(&mut self, enabled: bool) {
        self.pointer_enabled = enabled;
    }

    // =========================================================================
    // ENTRY POINTS
    // =========================================================================

    /// Pointer moved to `(x, y)`.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.pointer_enabled {
            return;
        }

        let previous = self.hovered;
        let mut hovered = None;
        let root = self.root();
        self.dfs_mut(root, |tree, id| {
            if tree[id].style.is_collapsed() {
                return Traverse::SkipChildren;
            }
            let event = PointerEvent { node: id, x, y, button: None };
            if tree.point_inside(id, x, y) {
                hovered = Some(id);
                tree.enter(event);
            } else {
                tree.leave(event);
            }
            Traverse::Continue
        });

        // A handler may have destroyed the node it was called for.
        let hovered = hovered.filter(|&id| self.contains(id));
        if hovered != previous {
            tracing::trace!(?previous, ?hovered, "hover changed");
        }
        self.hovered = hovered;

        if let Some(prev) = previous {
            if !self.point_inside(prev, x, y) {
                self.leave_out(PointerEvent { node: prev, x, y, button: None });
            }
        }
        if let Some(id) = hovered {
            self.over(PointerEvent { node: id, x, y, button: None });
        }
    }

    /// Pointer left the window.
    pub fn pointer_leave_window(&mut self, x: f32, y: f32) {
        if let Some(id) = self.hovered.take() {
            self.leave_out(PointerEvent { node: id, x, y, button: None });
        }
        self.mouse_down = false;
        self.pressed = None;
    }

    /// Button pressed at `(x, y)`.
    pub fn pointer_down(&mut self, button: MouseButton, x: f32, y: f32) {
        if !self.pointer_enabled {
            return;
        }
        self.mouse_down = true;
        self.pressed = self.hovered;

        let Some(id) = self.hovered else {
            return;
        };
        let Some(node) = self.get_mut(id) else {
            return;
        };
        if node.mouse.contains(MouseState::INSIDE) {
            node.mouse.insert(MouseState::DOWN);
            self.bubble(Bubble::Down, PointerEvent { node: id, x, y, button: Some(button) });
        }
    }

    /// Button released at `(x, y)`.
    pub fn pointer_up(&mut self, button: MouseButton, x: f32, y: f32) {
        if !self.pointer_enabled && !self.mouse_down {
            return;
        }
        self.mouse_down = false;
        let event = |node| PointerEvent { node, x, y, button: Some(button) };

        if let Some(id) = self.hovered {
            self.bubble(Bubble::Up, event(id));

            // The nearest pressed node on the hovered chain receives the click.
            let mut current = Some(id);
            while let Some(candidate) = current {
                let Some(node) = self.get(candidate) else {
                    break;
                };
                if node.mouse.contains(MouseState::DOWN) {
                    let slot = if node.mouse.contains(MouseState::OVER) {
                        Bubble::ClickIn
                    } else {
                        Bubble::ClickOut
                    };
                    self.bubble(slot, event(candidate));
                    self.clear_flag(candidate, MouseState::DOWN);
                    break;
                }
                current = node.parent;
            }
            self.clear_flag(id, MouseState::DOWN);
        }

        // A press that ended off its node still owes that node a click-out.
        if let Some(pressed) = self.pressed.take() {
            let still_down = self.get(pressed).is_some_and(|n| n.mouse.contains(MouseState::DOWN));
            if still_down && !self.point_inside(pressed, x, y) {
                self.bubble(Bubble::ClickOut, event(pressed));
            }
            self.clear_flag(pressed, MouseState::DOWN);
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Enter edge, then the per-move inside notification.
    fn enter(&mut self, event: PointerEvent) {
        if self.set_flag(event.node, MouseState::INSIDE) {
            self.notify(Notify::Enter, &event);
        }
        self.notify(Notify::Inside, &event);
    }

    /// Leave edge.
    fn leave(&mut self, event: PointerEvent) {
        if self.clear_flag(event.node, MouseState::INSIDE) {
            self.notify(Notify::Leave, &event);
        }
    }

    /// Join the hovered chain: mark the node and its ancestors OVER, bottom up,
    /// for as long as `on_over` handlers let the event through.
    fn over(&mut self, event: PointerEvent) {
        if !self.set_flag(event.node, MouseState::OVER) {
            return;
        }
        self.clear_ancestors_over(event);

        let mut propagate = self.call_bubble(Bubble::Over, &event);
        let mut current = self.parent(event.node);
        while let Some(id) = current {
            if !propagate {
                break;
            }
            if self.set_flag(id, MouseState::OVER) {
                propagate = self.call_bubble(Bubble::Over, &PointerEvent { node: id, ..event });
            }
            current = self.parent(id);
        }
    }

    /// Leave edge plus removal from the hovered chain.
    fn leave_out(&mut self, event: PointerEvent) {
        if self.clear_flag(event.node, MouseState::INSIDE) {
            self.notify(Notify::Leave, &event);
        }
        if self.clear_flag(event.node, MouseState::OVER) {
            self.call_bubble(Bubble::Out, &event);
            self.clear_ancestors_over(event);
        }
    }

    /// Drop stale OVER flags above `event.node`, firing `on_out` for each.
    fn clear_ancestors_over(&mut self, event: PointerEvent) {
        let mut current = self.parent(event.node);
        while let Some(id) = current {
            if self.clear_flag(id, MouseState::OVER) {
                self.call_bubble(Bubble::Out, &PointerEvent { node: id, ..event });
            }
            current = self.parent(id);
        }
    }

    // =========================================================================
    // HANDLER CALLS
    // =========================================================================

    /// Set `flag`; true if it was not set before.
    fn set_flag(&mut self, id: NodeId, flag: MouseState) -> bool {
        match self.get_mut(id) {
            Some(node) if !node.mouse.contains(flag) => {
                node.mouse.insert(flag);
                true
            }
            _ => false,
        }
    }

    /// Clear `flag`; true if it was set before.
    fn clear_flag(&mut self, id: NodeId, flag: MouseState) -> bool {
        match self.get_mut(id) {
            Some(node) if node.mouse.contains(flag) => {
                node.mouse.remove(flag);
                true
            }
            _ => false,
        }
    }

    fn notify(&mut self, slot: Notify, event: &PointerEvent) {
        let handler = self.get(event.node).and_then(|n| n.handlers.notify(slot));
        if let Some(handler) = handler {
            handler(self, event);
        }
    }

    /// Invoke one bubbling handler; a missing handler lets the event through.
    fn call_bubble(&mut self, slot: Bubble, event: &PointerEvent) -> bool {
        let handler = self.get(event.node).and_then(|n| n.handlers.bubble(slot));
        match handler {
            Some(handler) => handler(self, event),
            None => true,
        }
    }

    /// Invoke `slot` on `event.node` and then on each ancestor until a
    /// handler returns false.
    pub(crate) fn bubble(&mut self, slot: Bubble, event: PointerEvent) {
        let mut current = Some(event.node);
        while let Some(id) = current {
            if !self.contains(id) {
                break;
            }
            if !self.call_bubble(slot, &PointerEvent { node: id, ..event }) {
                break;
            }
            current = self.parent(id);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
