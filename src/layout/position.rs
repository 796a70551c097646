//! Pass 5 - positions, overflow and scroll clamping; then the transform sweep.

use std::collections::VecDeque;

use kurbo::Affine;
use taffy::geometry::{Point, Size};

use crate::engine::{NodeId, Tree};
use crate::types::{FlexDir, FlexWrap, Traverse, TransformMode};

// =============================================================================
// Pass 5
// =============================================================================

pub(super) fn place(tree: &mut Tree) {
    let mut queue = VecDeque::from([tree.root()]);

    while let Some(parent) = queue.pop_front() {
        let children = tree[parent].children.clone();
        if children.is_empty() {
            continue;
        }

        let origin = tree[parent].output.pos;
        for &child in &children {
            let out = &mut tree[child].output;
            out.pos = origin;
            if !out.resolved.is_collapsed() {
                queue.push_back(child);
            }
        }

        place_lines(tree, parent, &children);
        clamp_scroll(tree, parent, &children);
    }
}

fn place_lines(tree: &mut Tree, parent: NodeId, children: &[NodeId]) {
    let out = &tree[parent].output;
    let style = out.resolved;
    let area = out.content_area();
    let content = out.content_size;
    let lines = out.flex_lines.clone();

    let dir = style.flex_dir;
    let wraps = style.flex_wrap == FlexWrap::Wrap;
    let start = Point {
        x: style.margin.left + style.padding.left,
        y: style.margin.top + style.padding.top,
    };

    let mut line_offset = Point::ZERO;
    for line in lines {
        let mut align = Point::ZERO;

        // Main axis: the parent's flex align over the line's leftover.
        let main_factor = style.flex_align.factor();
        match dir {
            FlexDir::Row => align.x = start.x + (area.width - line.width) * main_factor,
            FlexDir::Col => align.y = start.y + (area.height - line.height) * main_factor,
        }

        // Cross axis: lines as a block, only when wrapping.
        if wraps {
            let content_factor = style.content_align.factor();
            match dir {
                FlexDir::Row => align.y = start.y + (area.height - content.height) * content_factor,
                FlexDir::Col => align.x = start.x + (area.width - content.width) * content_factor,
            }
        }

        // Each child aligns within its line when wrapping, within the whole
        // content area otherwise.
        let (avail, base) = if wraps {
            (Size { width: line.width, height: line.height }, Point::ZERO)
        } else {
            (area, start)
        };

        let mut prev: Option<NodeId> = None;
        for &child in &children[line.start..line.end] {
            let end_of_prev = prev.map(|p| {
                let o = &tree[p].output;
                Point { x: o.pos.x + o.layout_size.width, y: o.pos.y + o.layout_size.height }
            });

            let out = &mut tree[child].output;
            let self_factor = out.resolved.self_align.factor();
            let size = out.layout_size;
            let mut offset = Point::ZERO;
            match dir {
                FlexDir::Row => offset.y = base.y + (avail.height - size.height) * self_factor,
                FlexDir::Col => offset.x = base.x + (avail.width - size.width) * self_factor,
            }

            out.pos.x += line_offset.x + align.x + offset.x;
            out.pos.y += line_offset.y + align.y + offset.y;

            if let Some(end) = end_of_prev {
                match dir {
                    FlexDir::Row => out.pos.x = end.x,
                    FlexDir::Col => out.pos.y = end.y,
                }
            }
            prev = Some(child);
        }

        match dir {
            FlexDir::Row => line_offset.y += line.height,
            FlexDir::Col => line_offset.x += line.width,
        }
    }
}

/// Overflow of the last child past the padded edge, and the persisted scroll
/// offsets pulled back into `[-overflow, 0]`.
fn clamp_scroll(tree: &mut Tree, parent: NodeId, children: &[NodeId]) {
    let trailing = children.last().map(|&last| {
        let o = &tree[last].output;
        Point { x: o.pos.x + o.layout_size.width, y: o.pos.y + o.layout_size.height }
    });

    let node = &mut tree[parent];
    let out = &mut node.output;
    let style = out.resolved;
    let edge = Point {
        x: out.pos.x + style.margin.left + out.rect_size.width - style.padding.right,
        y: out.pos.y + style.margin.top + out.rect_size.height - style.padding.bottom,
    };
    out.content_overflow = match trailing {
        Some(end) => Size { width: end.x - edge.x, height: end.y - edge.y },
        None => Size::ZERO,
    };

    let overflow = out.content_overflow;
    if overflow.height > 0.0 {
        node.style.vscroll = node.style.vscroll.clamp(-overflow.height, 0.0);
    }
    if overflow.width > 0.0 {
        node.style.hscroll = node.style.hscroll.clamp(-overflow.width, 0.0);
    }
    node.output.resolved.vscroll = node.style.vscroll;
    node.output.resolved.hscroll = node.style.hscroll;
}

// =============================================================================
// Transform sweep
// =============================================================================

/// Compose screen transforms top-down and record clip rects.
pub(super) fn resolve_transforms(tree: &mut Tree) {
    let root = tree.root();
    tree.dfs_mut(root, |tree, id| {
        let parent = tree[id].parent.map(|p| {
            let node = &tree[p];
            (node.output.screen_transform, node.style.hscroll, node.style.vscroll)
        });

        let node = &mut tree[id];
        let out = &mut node.output;
        match out.resolved.transform_mode {
            TransformMode::Local => match parent {
                Some((parent_screen, hscroll, vscroll)) => {
                    let scroll = Affine::translate((hscroll as f64, vscroll as f64));
                    out.transform = node.style.transform * scroll;
                    out.screen_transform = parent_screen * out.transform;
                }
                None => {
                    out.transform = node.style.transform;
                    out.screen_transform = out.transform;
                }
            },
            TransformMode::Screen => {
                out.transform = node.style.transform;
                out.screen_transform = node.style.transform;
                out.pos = Point::ZERO;
            }
        }
        out.clip_rect = out.local_rect();

        if out.resolved.is_collapsed() { Traverse::SkipChildren } else { Traverse::Continue }
    });
}
