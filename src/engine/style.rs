//! Node style - the per-node configuration the layout passes read.
//!
//! Setters are chainable:
//!
//! ```ignore
//! style
//!     .set_flex_dir(FlexDir::Row)
//!     .set_width(Dimension::parent(1.0))
//!     .set_padding(8.0);
//! ```

use kurbo::{Affine, RoundedRectRadii};
use taffy::geometry::Rect;

use crate::types::{
    Axis, Dimension, DisplayMode, FlexAlign, FlexDir, FlexWrap, ImageId, Rgba, TransformMode,
};

/// Default font size for text nodes.
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// All four edges set to `value`.
pub fn edges(value: f32) -> Rect<f32> {
    Rect { left: value, right: value, top: value, bottom: value }
}

/// Sum of the two edges lying along `axis`.
#[inline]
pub fn edge_sum(edges: &Rect<f32>, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => edges.left + edges.right,
        Axis::Vertical => edges.top + edges.bottom,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub display_mode: DisplayMode,
    pub transform_mode: TransformMode,
    pub transform: Affine,

    pub color: Rgba,
    pub font_size: f32,
    pub image: Option<ImageId>,

    pub vscroll_enabled: bool,
    pub hscroll_enabled: bool,
    /// Persisted vertical scroll offset, kept in `[-overflow, 0]` by layout.
    pub vscroll: f32,
    /// Persisted horizontal scroll offset, kept in `[-overflow, 0]` by layout.
    pub hscroll: f32,
    /// Clip children to this node's rect; also restricts hit testing of
    /// this node to its parent's rect.
    pub clip: bool,

    pub width: Dimension,
    pub height: Dimension,
    pub radii: RoundedRectRadii,
    pub margin: Rect<f32>,
    pub padding: Rect<f32>,

    pub flex_dir: FlexDir,
    pub flex_wrap: FlexWrap,
    pub flex_align: FlexAlign,
    pub items_align: FlexAlign,
    pub content_align: FlexAlign,
    pub self_align: FlexAlign,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Shown,
            transform_mode: TransformMode::Local,
            transform: Affine::IDENTITY,
            color: Rgba::TRANSPARENT,
            font_size: DEFAULT_FONT_SIZE,
            image: None,
            vscroll_enabled: true,
            hscroll_enabled: true,
            vscroll: 0.0,
            hscroll: 0.0,
            clip: true,
            width: Dimension::default(),
            height: Dimension::default(),
            radii: RoundedRectRadii::from_single_radius(0.0),
            margin: edges(0.0),
            padding: edges(0.0),
            flex_dir: FlexDir::Col,
            flex_wrap: FlexWrap::NoWrap,
            flex_align: FlexAlign::Start,
            items_align: FlexAlign::Start,
            content_align: FlexAlign::Start,
            self_align: FlexAlign::Inherit,
        }
    }
}

impl NodeStyle {
    /// Style given to text nodes: sized to content, flowing in rows with wrapping.
    pub fn text() -> Self {
        Self {
            color: Rgba::BLACK,
            width: Dimension::fit_content(),
            height: Dimension::fit_content(),
            flex_dir: FlexDir::Row,
            flex_wrap: FlexWrap::Wrap,
            ..Self::default()
        }
    }

    /// Width or height, by axis.
    #[inline]
    pub fn dimension(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn margin_row(&self) -> f32 {
        edge_sum(&self.margin, Axis::Horizontal)
    }

    #[inline]
    pub fn margin_col(&self) -> f32 {
        edge_sum(&self.margin, Axis::Vertical)
    }

    #[inline]
    pub fn padding_row(&self) -> f32 {
        edge_sum(&self.padding, Axis::Horizontal)
    }

    #[inline]
    pub fn padding_col(&self) -> f32 {
        edge_sum(&self.padding, Axis::Vertical)
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.display_mode == DisplayMode::Collapsed
    }

    // =========================================================================
    // SETTERS
    // =========================================================================

    pub fn set_display_mode(&mut self, mode: DisplayMode) -> &mut Self {
        self.display_mode = mode;
        self
    }

    /// Transform composed with the parent's screen transform.
    pub fn set_local_transform(&mut self, transform: Affine) -> &mut Self {
        self.transform_mode = TransformMode::Local;
        self.transform = transform;
        self
    }

    /// Transform used as the screen transform, ignoring ancestors.
    pub fn set_screen_transform(&mut self, transform: Affine) -> &mut Self {
        self.transform_mode = TransformMode::Screen;
        self.transform = transform;
        self
    }

    pub fn set_color(&mut self, color: Rgba) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_font_size(&mut self, size: f32) -> &mut Self {
        self.font_size = size;
        self
    }

    pub fn set_image(&mut self, image: Option<ImageId>) -> &mut Self {
        self.image = image;
        self
    }

    pub fn set_vscroll_enabled(&mut self, value: bool) -> &mut Self {
        self.vscroll_enabled = value;
        self
    }

    pub fn set_hscroll_enabled(&mut self, value: bool) -> &mut Self {
        self.hscroll_enabled = value;
        self
    }

    pub fn set_clip(&mut self, value: bool) -> &mut Self {
        self.clip = value;
        self
    }

    pub fn set_width(&mut self, width: impl Into<Dimension>) -> &mut Self {
        self.width = width.into();
        self
    }

    pub fn set_height(&mut self, height: impl Into<Dimension>) -> &mut Self {
        self.height = height.into();
        self
    }

    pub fn set_size(
        &mut self,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> &mut Self {
        self.set_width(width).set_height(height)
    }

    pub fn set_border_radius(&mut self, radius: f64) -> &mut Self {
        self.radii = RoundedRectRadii::from_single_radius(radius);
        self
    }

    pub fn set_border_radii(&mut self, radii: RoundedRectRadii) -> &mut Self {
        self.radii = radii;
        self
    }

    pub fn set_margin(&mut self, value: f32) -> &mut Self {
        self.margin = edges(value);
        self
    }

    /// Left and right margins.
    pub fn set_margin_row(&mut self, value: f32) -> &mut Self {
        self.margin.left = value;
        self.margin.right = value;
        self
    }

    /// Top and bottom margins.
    pub fn set_margin_col(&mut self, value: f32) -> &mut Self {
        self.margin.top = value;
        self.margin.bottom = value;
        self
    }

    pub fn set_margin_edges(&mut self, margin: Rect<f32>) -> &mut Self {
        self.margin = margin;
        self
    }

    pub fn set_padding(&mut self, value: f32) -> &mut Self {
        self.padding = edges(value);
        self
    }

    /// Left and right padding.
    pub fn set_padding_row(&mut self, value: f32) -> &mut Self {
        self.padding.left = value;
        self.padding.right = value;
        self
    }

    /// Top and bottom padding.
    pub fn set_padding_col(&mut self, value: f32) -> &mut Self {
        self.padding.top = value;
        self.padding.bottom = value;
        self
    }

    pub fn set_padding_edges(&mut self, padding: Rect<f32>) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn set_flex_dir(&mut self, dir: FlexDir) -> &mut Self {
        self.flex_dir = dir;
        self
    }

    pub fn set_flex_wrap(&mut self, wrap: FlexWrap) -> &mut Self {
        self.flex_wrap = wrap;
        self
    }

    pub fn set_flex_align(&mut self, align: FlexAlign) -> &mut Self {
        self.flex_align = align;
        self
    }

    pub fn set_items_align(&mut self, align: FlexAlign) -> &mut Self {
        self.items_align = align;
        self
    }

    pub fn set_content_align(&mut self, align: FlexAlign) -> &mut Self {
        self.content_align = align;
        self
    }

    pub fn set_self_align(&mut self, align: FlexAlign) -> &mut Self {
        self.self_align = align;
        self
    }
}
