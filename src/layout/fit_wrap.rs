//! Pass 3 - Wrap + FitContent containers.
//!
//! A wrapping container sized to its content cannot be wider than the space
//! its parent offers, so it first gives back whatever overflows its maximum
//! content area. Siblings that wrap along the parent's main axis then share
//! the main-axis space left over by their fixed-size siblings, in proportion
//! to the content they request.

use std::collections::VecDeque;

use super::output::{get, get_mut};
use super::sizing::max_content_area;
use crate::engine::{NodeId, Tree};
use crate::types::{Axis, FlexDir, FlexWrap};

/// Per-group accumulator: one is created for each parent's children.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SiblingFold {
    axis: Axis,
    /// Main-axis space not claimed by fixed siblings; never negative.
    available: f32,
    /// Wrapping siblings and the content size each requested.
    requests: Vec<(NodeId, f32)>,
    total_requested: f32,
}

impl SiblingFold {
    pub(crate) fn new(dir: FlexDir, available: f32) -> Self {
        Self { axis: dir.main_axis(), available, requests: Vec::new(), total_requested: 0.0 }
    }

    /// Collect a wrapping sibling's request.
    pub(crate) fn request(&mut self, id: NodeId, content: f32) {
        self.requests.push((id, content));
        self.total_requested += content;
    }

    /// Subtract a fixed sibling's main-axis layout size.
    pub(crate) fn claim(&mut self, layout: f32) {
        self.available = (self.available - layout).max(0.0);
    }

    /// Main-axis layout size granted to each collected sibling.
    pub(crate) fn shares(&self) -> impl Iterator<Item = (NodeId, f32)> + '_ {
        let total = self.total_requested;
        let available = self.available;
        self.requests
            .iter()
            .filter(move |_| total > 0.0)
            .map(move |&(id, requested)| (id, requested / total * available))
    }
}

/// Run pass 3 over the whole tree, parents before children.
pub(super) fn distribute(tree: &mut Tree) {
    let mut queue = VecDeque::from([tree.root()]);

    while let Some(parent) = queue.pop_front() {
        let children = tree[parent].children.clone();
        if children.is_empty() {
            continue;
        }
        let parent_out = &tree[parent].output;
        let dir = parent_out.resolved.flex_dir;
        let content_area = parent_out.content_area();
        let mut fold = SiblingFold::new(dir, get(parent_out.max_content_area, dir.main_axis()));

        for &child in &children {
            let out = &mut tree[child].output;
            out.max_content_area = max_content_area(out, content_area);

            if out.resolved.flex_wrap == FlexWrap::Wrap {
                for axis in [Axis::Horizontal, Axis::Vertical] {
                    let max = get(out.max_content_area, axis);
                    let content = get(out.content_size, axis);
                    if out.resolved.dimension(axis).is_fit_content() && content > max {
                        let overflow = content - max;
                        *get_mut(&mut out.layout_size, axis) -= overflow;
                        *get_mut(&mut out.rect_size, axis) -= overflow;
                    }
                }
            }

            let axis = fold.axis;
            let wraps_along = out.resolved.flex_dir == dir
                && out.resolved.flex_wrap == FlexWrap::Wrap
                && out.resolved.dimension(axis).is_fit_content();
            if wraps_along {
                fold.request(child, get(out.content_size, axis));
            } else {
                fold.claim(get(out.layout_size, axis));
            }

            if !out.resolved.is_collapsed() {
                queue.push_back(child);
            }
        }

        let axis = fold.axis;
        for (id, layout) in fold.shares() {
            let out = &mut tree[id].output;
            let margin = out.margin(axis);
            *get_mut(&mut out.layout_size, axis) = layout;
            *get_mut(&mut out.rect_size, axis) = layout - margin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tree: &mut Tree, n: usize) -> Vec<NodeId> {
        (0..n).map(|i| tree.create_box(format!("n{i}"))).collect()
    }

    #[test]
    fn test_fold_proportional_shares() {
        let mut tree = Tree::new();
        let n = ids(&mut tree, 2);
        let mut fold = SiblingFold::new(FlexDir::Row, 300.0);
        fold.claim(100.0);
        fold.request(n[0], 30.0);
        fold.request(n[1], 90.0);
        let shares: Vec<_> = fold.shares().collect();
        assert_eq!(shares, vec![(n[0], 50.0), (n[1], 150.0)]);
    }

    #[test]
    fn test_fold_available_never_negative() {
        let mut tree = Tree::new();
        let n = ids(&mut tree, 1);
        let mut fold = SiblingFold::new(FlexDir::Col, 50.0);
        fold.claim(80.0);
        fold.request(n[0], 10.0);
        assert_eq!(fold.shares().collect::<Vec<_>>(), vec![(n[0], 0.0)]);
    }

    #[test]
    fn test_fold_zero_total_grants_nothing() {
        let mut tree = Tree::new();
        let n = ids(&mut tree, 1);
        let mut fold = SiblingFold::new(FlexDir::Row, 50.0);
        fold.request(n[0], 0.0);
        assert_eq!(fold.shares().count(), 0);
    }

    #[test]
    fn test_fold_is_per_group() {
        // Folds never share totals, so a second group sees only its own requests.
        let mut tree = Tree::new();
        let n = ids(&mut tree, 2);
        let mut first = SiblingFold::new(FlexDir::Row, 100.0);
        first.request(n[0], 40.0);
        let mut second = SiblingFold::new(FlexDir::Row, 100.0);
        second.request(n[1], 40.0);
        assert_eq!(second.shares().collect::<Vec<_>>(), vec![(n[1], 100.0)]);
    }
}
