//! Output cache - per-node layout results, rebuilt by every layout call.

use kurbo::Affine;
use taffy::geometry::{Point, Size};

use crate::engine::NodeStyle;
use crate::types::Axis;

/// Contiguous run of a parent's children placed on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexLine {
    /// First child index (inclusive).
    pub start: usize,
    /// Last child index (exclusive).
    pub end: usize,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutput {
    /// Style with alignments resolved and collapsed sizes zeroed.
    pub resolved: NodeStyle,
    /// Top-left of the margin box, in root layout space.
    pub pos: Point<f32>,
    /// Size without margins.
    pub rect_size: Size<f32>,
    /// Size with margins.
    pub layout_size: Size<f32>,
    pub content_size: Size<f32>,
    /// How far content extends past the padded edge (negative when it fits).
    pub content_overflow: Size<f32>,
    /// Largest content area this node may grow to inside its parent.
    pub max_content_area: Size<f32>,
    pub flex_lines: Vec<FlexLine>,
    /// Style transform composed with the parent's scroll translation.
    pub transform: Affine,
    pub screen_transform: Affine,
    /// Node rect in its own coordinate space.
    pub clip_rect: kurbo::Rect,
}

impl NodeOutput {
    pub(crate) fn from_style(style: NodeStyle) -> Self {
        Self {
            resolved: style,
            pos: Point::ZERO,
            rect_size: Size::ZERO,
            layout_size: Size::ZERO,
            content_size: Size::ZERO,
            content_overflow: Size::ZERO,
            max_content_area: Size::ZERO,
            flex_lines: Vec::new(),
            transform: Affine::IDENTITY,
            screen_transform: Affine::IDENTITY,
            clip_rect: kurbo::Rect::ZERO,
        }
    }

    /// Top-left of the rect (position plus leading margins).
    pub fn rect_pos(&self) -> Point<f32> {
        Point {
            x: self.pos.x + self.resolved.margin.left,
            y: self.pos.y + self.resolved.margin.top,
        }
    }

    /// Rect size minus own padding.
    pub fn content_area(&self) -> Size<f32> {
        Size {
            width: self.rect_size.width - self.resolved.padding_row(),
            height: self.rect_size.height - self.resolved.padding_col(),
        }
    }

    /// The node rect in layout space, before any transform.
    pub fn local_rect(&self) -> kurbo::Rect {
        let pos = self.rect_pos();
        kurbo::Rect::from_origin_size(
            (pos.x as f64, pos.y as f64),
            (self.rect_size.width as f64, self.rect_size.height as f64),
        )
    }

    /// Bounding box of the node rect mapped by the screen transform.
    pub fn screen_rect(&self) -> kurbo::Rect {
        self.screen_transform.transform_rect_bbox(self.local_rect())
    }

    /// Bounding box of the clip rect mapped by the screen transform.
    pub fn screen_clip(&self) -> kurbo::Rect {
        self.screen_transform.transform_rect_bbox(self.clip_rect)
    }

    // =========================================================================
    // Axis helpers
    // =========================================================================

    pub(crate) fn margin(&self, axis: Axis) -> f32 {
        crate::engine::edge_sum(&self.resolved.margin, axis)
    }

    pub(crate) fn padding(&self, axis: Axis) -> f32 {
        crate::engine::edge_sum(&self.resolved.padding, axis)
    }

    /// Size the node to its content along `axis`. Text has no padding box.
    pub(crate) fn fit_to_content(&mut self, axis: Axis, with_padding: bool) {
        let padding = if with_padding { self.padding(axis) } else { 0.0 };
        let content = get(self.content_size, axis);
        let margin = self.margin(axis);
        *get_mut(&mut self.layout_size, axis) = content + margin + padding;
        *get_mut(&mut self.rect_size, axis) = content + padding;
    }
}

/// Component of a size along `axis`.
#[inline]
pub(crate) fn get(size: Size<f32>, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => size.width,
        Axis::Vertical => size.height,
    }
}

#[inline]
pub(crate) fn get_mut(size: &mut Size<f32>, axis: Axis) -> &mut f32 {
    match axis {
        Axis::Horizontal => &mut size.width,
        Axis::Vertical => &mut size.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_area_and_rect_pos() {
        let mut style = NodeStyle::default();
        style.set_margin(3.0).set_padding_row(4.0);
        let mut out = NodeOutput::from_style(style);
        out.rect_size = Size { width: 40.0, height: 20.0 };
        out.pos = Point { x: 10.0, y: 10.0 };
        assert_eq!(out.content_area(), Size { width: 32.0, height: 20.0 });
        assert_eq!(out.rect_pos(), Point { x: 13.0, y: 13.0 });
        assert_eq!(out.local_rect(), kurbo::Rect::new(13.0, 13.0, 53.0, 33.0));
    }

    #[test]
    fn test_fit_to_content() {
        let mut style = NodeStyle::default();
        style.set_margin_row(2.0).set_padding_row(5.0);
        let mut out = NodeOutput::from_style(style);
        out.content_size = Size { width: 100.0, height: 20.0 };
        out.fit_to_content(Axis::Horizontal, true);
        assert_eq!(out.layout_size.width, 114.0);
        assert_eq!(out.rect_size.width, 110.0);
        out.fit_to_content(Axis::Horizontal, false);
        assert_eq!(out.rect_size.width, 100.0);
    }
}
