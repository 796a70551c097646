//! Paint traversal and the [`Painter`] seam.
//!
//! The tree is walked depth-first in child order. Each node is painted under
//! the clips of every clipping ancestor; a node that is not `Shown` is
//! skipped together with its subtree.

use kurbo::{Affine, RoundedRect};

use crate::engine::{NodeId, NodeKind, Tree};
use crate::types::{DisplayMode, ImageId, Rgba, Traverse};

/// Text to draw at a node's rect origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Top-left of the text rect in the node's coordinate space.
    pub origin: kurbo::Point,
    /// Width the run was wrapped to by layout.
    pub max_width: f64,
    pub font_size: f32,
    pub color: Rgba,
}

/// Drawing backend.
///
/// Geometry is given in node space together with the transform mapping it
/// to the screen.
pub trait Painter {
    /// Intersect the current clip with `rect` mapped by `transform`.
    fn push_clip(&mut self, rect: kurbo::Rect, transform: Affine);
    /// Undo the matching `push_clip`.
    fn pop_clip(&mut self);
    fn fill_rect(&mut self, node: NodeId, rect: RoundedRect, transform: Affine, color: Rgba);
    fn draw_image(&mut self, node: NodeId, image: ImageId, rect: kurbo::Rect, transform: Affine);
    fn draw_text(&mut self, node: NodeId, run: &TextRun<'_>, transform: Affine);
}

impl Tree {
    /// Emit painter calls for the output of the last layout.
    pub fn paint(&self, painter: &mut impl Painter) {
        // One entry per ancestor level: whether that level pushed a clip.
        let mut frames: Vec<bool> = Vec::new();

        self.dfs_with_level(self.root(), |id, node, level| {
            while frames.len() > level {
                if frames.pop() == Some(true) {
                    painter.pop_clip();
                }
            }

            let clip = node
                .parent
                .and_then(|p| self.get(p))
                .filter(|p| p.output.resolved.clip)
                .map(|p| (p.output.clip_rect, p.output.screen_transform));
            if let Some((rect, transform)) = clip {
                painter.push_clip(rect, transform);
            }
            frames.push(clip.is_some());

            if node.style.display_mode != DisplayMode::Shown {
                return Traverse::SkipChildren;
            }

            let out = &node.output;
            let style = &out.resolved;
            let rect = out.local_rect();
            match node.kind {
                NodeKind::Box => {
                    let shape = RoundedRect::from_rect(rect, style.radii);
                    painter.fill_rect(id, shape, out.screen_transform, style.color);
                    if let Some(image) = style.image {
                        let inner = kurbo::Rect::new(
                            rect.x0 + style.padding.left as f64,
                            rect.y0 + style.padding.top as f64,
                            rect.x1 - style.padding.right as f64,
                            rect.y1 - style.padding.bottom as f64,
                        );
                        painter.draw_image(id, image, inner, out.screen_transform);
                    }
                }
                NodeKind::Text => {
                    let run = TextRun {
                        text: &node.text,
                        origin: rect.origin(),
                        max_width: rect.width(),
                        font_size: style.font_size,
                        color: style.color,
                    };
                    painter.draw_text(id, &run, out.screen_transform);
                }
            }
            Traverse::Continue
        });

        while let Some(pushed) = frames.pop() {
            if pushed {
                painter.pop_clip();
            }
        }
    }
}

// =============================================================================
// DISPLAY LIST
// =============================================================================

/// One recorded painter call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PushClip { rect: kurbo::Rect, transform: Affine },
    PopClip,
    FillRect { node: NodeId, rect: RoundedRect, transform: Affine, color: Rgba },
    Image { node: NodeId, image: ImageId, rect: kurbo::Rect, transform: Affine },
    Text {
        node: NodeId,
        text: String,
        origin: kurbo::Point,
        max_width: f64,
        font_size: f32,
        color: Rgba,
        transform: Affine,
    },
}

/// Painter that records its calls, for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Nodes painted, in paint order.
    pub fn painted_nodes(&self) -> Vec<NodeId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { node, .. } | DrawCommand::Text { node, .. } => Some(*node),
                _ => None,
            })
            .collect()
    }
}

impl Painter for DisplayList {
    fn push_clip(&mut self, rect: kurbo::Rect, transform: Affine) {
        self.commands.push(DrawCommand::PushClip { rect, transform });
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }

    fn fill_rect(&mut self, node: NodeId, rect: RoundedRect, transform: Affine, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { node, rect, transform, color });
    }

    fn draw_image(&mut self, node: NodeId, image: ImageId, rect: kurbo::Rect, transform: Affine) {
        self.commands.push(DrawCommand::Image { node, image, rect, transform });
    }

    fn draw_text(&mut self, node: NodeId, run: &TextRun<'_>, transform: Affine) {
        self.commands.push(DrawCommand::Text {
            node,
            text: run.text.to_string(),
            origin: run.origin,
            max_width: run.max_width,
            font_size: run.font_size,
            color: run.color,
            transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CellMeasure;

    fn setup() -> (Tree, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.style_mut(root).unwrap().set_size(100.0, 100.0);
        let panel = tree.create_box_with("panel", |s| {
            s.set_size(50.0, 50.0)
                .set_padding(5.0)
                .set_color(Rgba::GRAY)
                .set_image(Some(ImageId(7)));
        });
        let label = tree.create_text("label", "hi");
        let hidden = tree.create_box_with("hidden", |s| {
            s.set_size(10.0, 10.0).set_display_mode(DisplayMode::Hidden);
        });
        tree.append(root, panel);
        tree.append(panel, label);
        tree.append(root, hidden);
        tree.layout(&mut CellMeasure::default());
        (tree, panel, label, hidden)
    }

    #[test]
    fn test_paint_order_skips_hidden() {
        let (tree, panel, label, hidden) = setup();
        let mut list = DisplayList::new();
        tree.paint(&mut list);
        assert_eq!(list.painted_nodes(), vec![tree.root(), panel, label]);
        assert!(!list.painted_nodes().contains(&hidden));
    }

    #[test]
    fn test_clips_balanced() {
        let (tree, _, _, _) = setup();
        let mut list = DisplayList::new();
        tree.paint(&mut list);
        let pushes = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::PushClip { .. }))
            .count();
        let pops = list.commands.iter().filter(|c| matches!(c, DrawCommand::PopClip)).count();
        assert_eq!(pushes, 3);
        assert_eq!(pushes, pops);
    }

    #[test]
    fn test_image_inset_by_padding() {
        let (tree, panel, _, _) = setup();
        let mut list = DisplayList::new();
        tree.paint(&mut list);
        let image = list.commands.iter().find_map(|c| match c {
            DrawCommand::Image { node, rect, .. } if *node == panel => Some(*rect),
            _ => None,
        });
        assert_eq!(image, Some(kurbo::Rect::new(5.0, 5.0, 45.0, 45.0)));
    }
}
