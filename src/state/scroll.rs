//! Scroll State Module
//!
//! Manages scrolling behavior:
//! - Per-node scroll offsets (persisted in the node's style)
//! - Scroll bounds from layout (`content_overflow`)
//! - Scroll operations with clamping
//! - Parent chaining for the mouse wheel
//!
//! Offsets are non-positive: `0` shows the start of the content and
//! `-overflow` its end. Positive deltas move toward the start.

use crate::engine::{NodeId, Tree};
use crate::types::Axis;

// =============================================================================
// SCROLL STATE ACCESS
// =============================================================================

impl Tree {
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Gate wheel dispatch.
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    /// Whether `id` has content past its edge along `axis` and scrolling
    /// enabled on that axis.
    pub fn is_scrollable(&self, id: NodeId, axis: Axis) -> bool {
        self.max_scroll(id, axis) > 0.0 && self.get(id).is_some_and(|n| enabled(&n.style, axis))
    }

    /// Current `(horizontal, vertical)` offsets.
    pub fn scroll_offset(&self, id: NodeId) -> (f32, f32) {
        self.get(id).map(|n| (n.style.hscroll, n.style.vscroll)).unwrap_or((0.0, 0.0))
    }

    /// Overflow along `axis` from the last layout, zero when content fits.
    pub fn max_scroll(&self, id: NodeId, axis: Axis) -> f32 {
        self.get(id)
            .map(|n| match axis {
                Axis::Horizontal => n.output.content_overflow.width,
                Axis::Vertical => n.output.content_overflow.height,
            })
            .unwrap_or(0.0)
            .max(0.0)
    }

    // =========================================================================
    // SCROLL OPERATIONS
    // =========================================================================

    /// Set both offsets, clamped to the bounds from the last layout.
    pub fn set_scroll_offset(&mut self, id: NodeId, x: f32, y: f32) {
        let max_x = self.max_scroll(id, Axis::Horizontal);
        let max_y = self.max_scroll(id, Axis::Vertical);
        if let Some(style) = self.style_mut(id) {
            style.hscroll = x.clamp(-max_x, 0.0);
            style.vscroll = y.clamp(-max_y, 0.0);
        }
    }

    pub fn scroll_to_top(&mut self, id: NodeId) {
        if let Some(style) = self.style_mut(id) {
            style.vscroll = 0.0;
        }
    }

    pub fn scroll_to_bottom(&mut self, id: NodeId) {
        let max = self.max_scroll(id, Axis::Vertical);
        if let Some(style) = self.style_mut(id) {
            style.vscroll = -max;
        }
    }

    // =========================================================================
    // WHEEL DISPATCH
    // =========================================================================

    /// Wheel scroll along the vertical axis. Returns the node that scrolled.
    pub fn scroll_vertical(&mut self, delta: f32) -> Option<NodeId> {
        self.scroll_chain(Axis::Vertical, delta)
    }

    /// Wheel scroll along the horizontal axis. Returns the node that scrolled.
    pub fn scroll_horizontal(&mut self, delta: f32) -> Option<NodeId> {
        self.scroll_chain(Axis::Horizontal, delta)
    }

    /// Walk up from the hovered node to the nearest node that can still move
    /// in the direction of `delta`, and move it.
    fn scroll_chain(&mut self, axis: Axis, delta: f32) -> Option<NodeId> {
        if !self.scroll_enabled {
            return None;
        }

        let mut current = self.hovered;
        while let Some(id) = current {
            let node = self.get(id)?;
            let parent = node.parent;
            let overflow = self.max_scroll(id, axis);

            if overflow > 0.0 && enabled(&node.style, axis) {
                let min = -overflow;
                let offset = offset(&node.style, axis);
                let pinned = (offset == min && delta < 0.0) || (offset == 0.0 && delta > 0.0);
                if !pinned {
                    let next = (offset + delta).clamp(min, 0.0);
                    if let Some(style) = self.style_mut(id) {
                        match axis {
                            Axis::Horizontal => style.hscroll = next,
                            Axis::Vertical => style.vscroll = next,
                        }
                    }
                    tracing::debug!(node = ?id, ?axis, offset = next, "scrolled");
                    return Some(id);
                }
            }
            current = parent;
        }
        None
    }
}

fn enabled(style: &crate::engine::NodeStyle, axis: Axis) -> bool {
    match axis {
        Axis::Horizontal => style.hscroll_enabled,
        Axis::Vertical => style.vscroll_enabled,
    }
}

fn offset(style: &crate::engine::NodeStyle, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => style.hscroll,
        Axis::Vertical => style.vscroll,
    }
}

// =============================================================================
// TESTS
// =============================================================================
