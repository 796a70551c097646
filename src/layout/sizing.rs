//! Passes 1 and 2 - style resolution and intrinsic sizing.
//!
//! Pass 1 walks pre-order: every node's output is rebuilt from its style,
//! inherited alignments are resolved and Fixed/Parent sizes computed. The
//! visitation order is returned so passes 2 and 4 can walk it backwards
//! (children before parents).
//!
//! Pass 2 walks that order in reverse: content size is summed from the
//! children (or measured for text) and FitContent axes grow to it.

use taffy::geometry::Size;

use super::output::{NodeOutput, get, get_mut};
use super::text_measure::TextMeasure;
use crate::engine::{NodeId, NodeKind, Tree};
use crate::types::{Axis, Dimension, FlexAlign, FlexDir, SizeMode, Traverse};

const AXES: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

/// What a child needs from its parent during pass 1.
struct ParentFrame {
    flex_align: FlexAlign,
    items_align: FlexAlign,
    content_align: FlexAlign,
    rect_size: Size<f32>,
    padding: Size<f32>,
    content_area: Size<f32>,
}

// =============================================================================
// Pass 1
// =============================================================================

/// Reset outputs, resolve alignments and Fixed/Parent sizes. Returns the
/// pre-order of visited nodes (collapsed subtrees contribute only their root).
pub(super) fn resolve(tree: &mut Tree) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(tree.len());
    let root = tree.root();

    tree.dfs_mut(root, |tree, id| {
        order.push(id);
        let frame = tree[id].parent.map(|p| {
            let out = &tree[p].output;
            ParentFrame {
                flex_align: out.resolved.flex_align,
                items_align: out.resolved.items_align,
                content_align: out.resolved.content_align,
                rect_size: out.rect_size,
                padding: Size {
                    width: out.padding(Axis::Horizontal),
                    height: out.padding(Axis::Vertical),
                },
                content_area: out.content_area(),
            }
        });

        let node = &mut tree[id];
        let mut out = NodeOutput::from_style(node.style);
        resolve_alignment(&mut out, frame.as_ref());

        if out.resolved.is_collapsed() {
            out.resolved.width = Dimension::fixed(0.0);
            out.resolved.height = Dimension::fixed(0.0);
            node.output = out;
            return Traverse::SkipChildren;
        }

        for axis in AXES {
            let dim = out.resolved.dimension(axis);
            let margin = out.margin(axis);
            match dim.mode {
                SizeMode::Fixed => {
                    *get_mut(&mut out.layout_size, axis) = dim.value + margin;
                    *get_mut(&mut out.rect_size, axis) = dim.value;
                }
                SizeMode::Parent => {
                    if let Some(frame) = &frame {
                        let parent_area = get(frame.rect_size, axis) - get(frame.padding, axis);
                        let layout = parent_area * dim.value;
                        *get_mut(&mut out.layout_size, axis) = layout;
                        *get_mut(&mut out.rect_size, axis) = layout - margin;
                    }
                }
                SizeMode::FitContent => {}
            }
        }

        out.max_content_area = match &frame {
            Some(frame) => max_content_area(&out, frame.content_area),
            None => out.content_area(),
        };

        node.output = out;
        Traverse::Continue
    });

    order
}

fn resolve_alignment(out: &mut NodeOutput, frame: Option<&ParentFrame>) {
    let (flex, items, content) = match frame {
        Some(f) => (f.flex_align, f.items_align, f.content_align),
        None => (FlexAlign::Start, FlexAlign::Start, FlexAlign::Start),
    };
    let style = &mut out.resolved;
    style.flex_align = style.flex_align.or(flex);
    style.items_align = style.items_align.or(items);
    style.content_align = style.content_align.or(content);
    // A child aligns itself the way its parent aligns items.
    style.self_align = style.self_align.or(items);
}

/// Parent content area less this node's own margin and padding.
pub(super) fn max_content_area(out: &NodeOutput, parent_content_area: Size<f32>) -> Size<f32> {
    let inset = |axis| out.margin(axis) + out.padding(axis);
    Size {
        width: parent_content_area.width - inset(Axis::Horizontal),
        height: parent_content_area.height - inset(Axis::Vertical),
    }
}

// =============================================================================
// Pass 2
// =============================================================================

/// Intrinsic content sizes, children first.
pub(super) fn intrinsic(tree: &mut Tree, order: &[NodeId], measure: &mut dyn TextMeasure) {
    for &id in order.iter().rev() {
        let node = &tree[id];
        if node.output.resolved.is_collapsed() {
            continue;
        }

        let content = match node.kind {
            NodeKind::Box => {
                let dir = node.output.resolved.flex_dir;
                let mut content = Size::ZERO;
                for &child in &node.children {
                    let size = tree[child].output.layout_size;
                    accumulate(&mut content, size, dir);
                }
                content
            }
            NodeKind::Text => measure.measure(&node.text, node.output.resolved.font_size),
        };

        let out = &mut tree[id].output;
        out.content_size = content;
        for axis in AXES {
            if out.resolved.dimension(axis).is_fit_content() {
                out.fit_to_content(axis, true);
            }
        }
    }
}

/// Sum along the main axis, max along the cross axis.
pub(super) fn accumulate(total: &mut Size<f32>, size: Size<f32>, dir: FlexDir) {
    match dir {
        FlexDir::Row => {
            total.width += size.width;
            total.height = total.height.max(size.height);
        }
        FlexDir::Col => {
            total.width = total.width.max(size.width);
            total.height += size.height;
        }
    }
}
