//! Pass 4 - flex line partitioning and final sizes.
//!
//! Nodes are processed children first. A box splits its children into lines
//! (one line unless it wraps), text is re-measured against the width it
//! actually got, and FitContent axes settle on the final content size.

use taffy::geometry::Size;

use super::output::{FlexLine, NodeOutput, get};
use super::sizing::accumulate;
use super::text_measure::TextMeasure;
use crate::engine::{NodeId, NodeKind, Tree};
use crate::types::{Axis, FlexDir, FlexWrap};

pub(super) fn partition(tree: &mut Tree, order: &[NodeId], measure: &mut dyn TextMeasure) {
    for &id in order.iter().rev() {
        let node = &tree[id];
        if node.output.resolved.is_collapsed() {
            continue;
        }
        if node.kind == NodeKind::Box && node.children.is_empty() {
            continue;
        }

        match (node.kind, node.output.resolved.flex_wrap) {
            (NodeKind::Box, wrap) => {
                let sizes: Vec<Size<f32>> =
                    node.children.iter().map(|&c| tree[c].output.layout_size).collect();
                let out = &mut tree[id].output;
                match wrap {
                    FlexWrap::NoWrap => single_line(out, &sizes),
                    FlexWrap::Wrap => wrap_lines(out, &sizes),
                }
            }
            (NodeKind::Text, FlexWrap::NoWrap) => {
                let out = &node.output;
                let width = out.content_area().width;
                let measured = measure.measure_wrapped(&node.text, out.resolved.font_size, width);
                let out = &mut tree[id].output;
                fit_text(out, measured);
                let Size { width, height } = out.layout_size;
                out.flex_lines = vec![FlexLine { start: 0, end: 0, width, height }];
            }
            (NodeKind::Text, FlexWrap::Wrap) => {
                let out = &node.output;
                let mut available = out.content_area().width;
                if let Some(parent) = node.parent.and_then(|p| tree.get(p)) {
                    if parent.output.resolved.width.is_fit_content() {
                        available = parent.output.max_content_area.width
                            - out.margin(Axis::Horizontal);
                    }
                }
                let mut content = out.content_size;
                if content.width > available {
                    let font_size = out.resolved.font_size;
                    content = measure.measure_wrapped(&node.text, font_size, available);
                }
                let out = &mut tree[id].output;
                fit_text(out, content);
                out.flex_lines = vec![FlexLine { start: 0, end: 0, width: 0.0, height: 0.0 }];
            }
        }

        refit(&mut tree[id].output);
    }
}

/// All children on one line.
fn single_line(out: &mut NodeOutput, sizes: &[Size<f32>]) {
    let dir = out.resolved.flex_dir;
    let mut extent = Size::ZERO;
    for &size in sizes {
        accumulate(&mut extent, size, dir);
    }

    let Size { width, height } = extent;
    out.flex_lines = vec![FlexLine { start: 0, end: sizes.len(), width, height }];
    out.content_size = extent;
    for axis in [Axis::Horizontal, Axis::Vertical] {
        if out.resolved.dimension(axis).is_fit_content() {
            out.fit_to_content(axis, true);
        }
    }
}

/// Greedy line breaking against the content area's main extent.
fn wrap_lines(out: &mut NodeOutput, sizes: &[Size<f32>]) {
    let dir = out.resolved.flex_dir;
    let main_axis = dir.main_axis();
    let limit = get(out.content_area(), main_axis);

    let mut lines = Vec::new();
    let mut start = 0;
    let mut extent = Size::ZERO;
    for (i, &size) in sizes.iter().enumerate() {
        if i > start && get(extent, main_axis) + get(size, main_axis) > limit {
            lines.push(FlexLine { start, end: i, width: extent.width, height: extent.height });
            start = i;
            extent = Size::ZERO;
        }
        accumulate(&mut extent, size, dir);
    }
    lines.push(FlexLine { start, end: sizes.len(), width: extent.width, height: extent.height });

    // Longest line along the main axis, lines stacked along the cross axis.
    let mut content = Size::ZERO;
    let cross = match dir {
        FlexDir::Row => FlexDir::Col,
        FlexDir::Col => FlexDir::Row,
    };
    for line in &lines {
        accumulate(&mut content, Size { width: line.width, height: line.height }, cross);
    }
    out.content_size = content;
    out.flex_lines = lines;
}

/// Text sizes to the measured run plus margins; it has no padding box.
fn fit_text(out: &mut NodeOutput, measured: Size<f32>) {
    out.content_size = measured;
    for axis in [Axis::Horizontal, Axis::Vertical] {
        if out.resolved.dimension(axis).is_fit_content() {
            out.fit_to_content(axis, false);
        }
    }
}

/// Settle FitContent axes on the final content size. Along the main axis a
/// node only shrinks back when its content area is larger than its content,
/// so a width granted by pass 3 is kept.
fn refit(out: &mut NodeOutput) {
    let dir = out.resolved.flex_dir;
    for axis in [Axis::Horizontal, Axis::Vertical] {
        if !out.resolved.dimension(axis).is_fit_content() {
            continue;
        }
        let cross = axis == dir.cross_axis();
        if cross || get(out.content_area(), axis) > get(out.content_size, axis) {
            out.fit_to_content(axis, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NodeStyle;
    use crate::layout::output::FlexLine;

    /// Test-only: a line is empty when its child range `start..end` is empty.
    trait FlexLineExt {
        fn is_empty(&self) -> bool;
    }

    impl FlexLineExt for FlexLine {
        fn is_empty(&self) -> bool {
            self.start == self.end
        }
    }

    fn setup(dir: FlexDir, wrap: FlexWrap, width: f32) -> NodeOutput {
        let mut style = NodeStyle::default();
        style.set_flex_dir(dir).set_flex_wrap(wrap).set_size(width, 100.0);
        let mut out = NodeOutput::from_style(style);
        out.rect_size = Size { width, height: 100.0 };
        out.layout_size = out.rect_size;
        out
    }

    fn sized(w: f32, h: f32) -> Size<f32> {
        Size { width: w, height: h }
    }

    #[test]
    fn test_wrap_breaks_greedily() {
        let mut out = setup(FlexDir::Row, FlexWrap::Wrap, 100.0);
        wrap_lines(&mut out, &[sized(40.0, 10.0), sized(40.0, 15.0), sized(40.0, 5.0)]);
        let ranges: Vec<_> = out.flex_lines.iter().map(|l| (l.start, l.end)).collect();
        assert_eq!(ranges, vec![(0, 2), (2, 3)]);
        assert_eq!(out.flex_lines[0].width, 80.0);
        assert_eq!(out.flex_lines[0].height, 15.0);
        assert_eq!(out.content_size, sized(80.0, 20.0));
    }

    #[test]
    fn test_wrap_oversized_child_gets_own_line() {
        let mut out = setup(FlexDir::Row, FlexWrap::Wrap, 100.0);
        wrap_lines(&mut out, &[sized(150.0, 10.0), sized(20.0, 10.0)]);
        let ranges: Vec<_> = out.flex_lines.iter().map(|l| (l.start, l.end)).collect();
        assert_eq!(ranges, vec![(0, 1), (1, 2)]);
        assert!(out.flex_lines.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_wrap_column() {
        let mut out = setup(FlexDir::Col, FlexWrap::Wrap, 100.0);
        wrap_lines(&mut out, &[sized(10.0, 60.0), sized(20.0, 60.0)]);
        assert_eq!(out.flex_lines.len(), 2);
        assert_eq!(out.content_size, sized(30.0, 60.0));
    }

    #[test]
    fn test_single_line_fit_content() {
        let mut out = setup(FlexDir::Row, FlexWrap::NoWrap, 0.0);
        out.resolved.set_width(crate::types::Dimension::fit_content()).set_margin_row(3.0);
        single_line(&mut out, &[sized(30.0, 10.0), sized(70.0, 20.0)]);
        assert_eq!(out.content_size, sized(100.0, 20.0));
        assert_eq!(out.layout_size.width, 106.0);
        assert_eq!(out.flex_lines, vec![FlexLine { start: 0, end: 2, width: 100.0, height: 20.0 }]);
    }
}
