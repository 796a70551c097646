//! Core types for boxflow.
//!
//! These types define the vocabulary shared by the style model, the layout
//! passes and the event dispatcher.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with floating point channels (0.0-1.0).
///
/// Alpha 1.0 = fully opaque, 0.0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Check if fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

// =============================================================================
// Input
// =============================================================================

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// =============================================================================
// Display & Transform
// =============================================================================

/// How a node participates in layout and painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Laid out and painted.
    #[default]
    Shown,
    /// Laid out but not painted.
    Hidden,
    /// Takes no space; the subtree is skipped by layout and dispatch.
    Collapsed,
}

/// Which coordinate space a node's transform is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// Composed with the parent's screen transform and scroll offsets.
    #[default]
    Local,
    /// Used as the screen transform directly.
    Screen,
}

/// Opaque image handle passed through to the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

// =============================================================================
// Sizing
// =============================================================================

/// How a dimension is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Absolute value; margins add on top.
    #[default]
    Fixed,
    /// Fraction of the parent's content area; margins are carved out.
    Parent,
    /// Size to content plus padding.
    FitContent,
}

/// A width or height: a sizing mode plus its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub mode: SizeMode,
    pub value: f32,
}

impl Default for Dimension {
    fn default() -> Self {
        Self::fixed(0.0)
    }
}

impl Dimension {
    pub const fn fixed(value: f32) -> Self {
        Self { mode: SizeMode::Fixed, value }
    }

    /// `fraction` of the parent's content area (1.0 = all of it).
    pub const fn parent(fraction: f32) -> Self {
        Self { mode: SizeMode::Parent, value: fraction }
    }

    pub const fn fit_content() -> Self {
        Self { mode: SizeMode::FitContent, value: 0.0 }
    }

    #[inline]
    pub fn is_fit_content(&self) -> bool {
        self.mode == SizeMode::FitContent
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Self::fixed(value)
    }
}

// =============================================================================
// Flex
// =============================================================================

/// Main axis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDir {
    Row,
    #[default]
    Col,
}

impl FlexDir {
    /// The axis children are laid out along.
    #[inline]
    pub fn main_axis(self) -> Axis {
        match self {
            FlexDir::Row => Axis::Horizontal,
            FlexDir::Col => Axis::Vertical,
        }
    }

    /// The axis flex lines stack along.
    #[inline]
    pub fn cross_axis(self) -> Axis {
        self.main_axis().flip()
    }
}

/// Whether children may break onto additional flex lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

/// Alignment value for main, items, content and self alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexAlign {
    /// Take the nearest ancestor's resolved value.
    Inherit,
    #[default]
    Start,
    Center,
    End,
}

impl FlexAlign {
    /// Share of the leftover space placed before the aligned item.
    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            FlexAlign::Inherit | FlexAlign::Start => 0.0,
            FlexAlign::Center => 0.5,
            FlexAlign::End => 1.0,
        }
    }

    /// Resolve `Inherit` against an already resolved value.
    #[inline]
    pub fn or(self, inherited: FlexAlign) -> FlexAlign {
        match self {
            FlexAlign::Inherit => inherited,
            other => other,
        }
    }
}

/// Horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    pub fn flip(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Visitor verdict for tree traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traverse {
    /// Visit this node's children.
    Continue,
    /// Do not descend below this node.
    SkipChildren,
    /// Stop the whole traversal.
    Break,
}

// =============================================================================
// TESTS
// =============================================================================
