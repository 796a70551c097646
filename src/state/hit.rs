//! Hit testing against the screen rects computed by the last layout.
//!
//! Rects are half-open: a point on the right or bottom edge is outside.

use kurbo::Point;

use crate::engine::{NodeId, Tree};
use crate::types::Traverse;

impl Tree {
    /// Whether `(x, y)` falls inside `id`'s screen rect and, when `id` clips,
    /// inside its parent's screen rect too. Only the immediate parent is
    /// consulted. Stale ids are never inside.
    pub fn point_inside(&self, id: NodeId, x: f32, y: f32) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        let point = Point::new(x as f64, y as f64);

        if node.output.resolved.clip {
            if let Some(parent) = node.parent.and_then(|p| self.get(p)) {
                if !parent.output.screen_rect().contains(point) {
                    return false;
                }
            }
        }
        node.output.screen_rect().contains(point)
    }

    /// The last node in depth-first order containing `(x, y)`, skipping
    /// collapsed subtrees. This is the node a move to `(x, y)` hovers.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<NodeId> {
        let mut hit = None;
        self.dfs(self.root(), |id, node| {
            if node.style.is_collapsed() {
                return Traverse::SkipChildren;
            }
            if self.point_inside(id, x, y) {
                hit = Some(id);
            }
            Traverse::Continue
        });
        hit
    }
}
