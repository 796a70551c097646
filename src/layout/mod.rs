//! Layout Module - five-pass box-flow layout.
//!
//! # Passes
//!
//! 1. **resolve** (pre-order): reset output, resolve inherited alignment,
//!    Fixed and Parent sizes, maximum content area.
//! 2. **intrinsic** (children first): content sizes, FitContent growth.
//! 3. **fit_wrap** (breadth-first): wrapping FitContent containers give back
//!    overflow and share their parent's leftover main-axis space.
//! 4. **flex_lines** (children first): line partitioning, text re-measure,
//!    final FitContent sizes.
//! 5. **position** (breadth-first): alignment, line stacking, overflow and
//!    scroll clamping.
//!
//! A sweep then composes screen transforms and clip rects, which hit
//! testing and painting read.
//!
//! # Example
//!
//! ```ignore
//! use boxflow::{CellMeasure, Dimension, FlexDir, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.root();
//! tree.style_mut(root).unwrap().set_size(800.0, 600.0);
//! let row = tree.create_box_with("row", |s| {
//!     s.set_flex_dir(FlexDir::Row).set_width(Dimension::parent(1.0));
//! });
//! tree.append(root, row);
//! tree.layout(&mut CellMeasure::default());
//! ```

mod fit_wrap;
mod flex_lines;
pub mod output;
mod position;
mod sizing;
mod text_measure;

pub use output::{FlexLine, NodeOutput};
pub use text_measure::{CellMeasure, TextMeasure, string_width, wrap_text};

use crate::engine::Tree;

impl Tree {
    /// Recompute every node's output from its style.
    ///
    /// Only the persisted scroll offsets survive between calls, so running
    /// layout twice without style changes yields identical outputs.
    pub fn layout(&mut self, measure: &mut dyn TextMeasure) {
        let _span = tracing::trace_span!("layout", nodes = self.len()).entered();

        let order = {
            let _pass = tracing::trace_span!("resolve").entered();
            sizing::resolve(self)
        };
        {
            let _pass = tracing::trace_span!("intrinsic").entered();
            sizing::intrinsic(self, &order, measure);
        }
        {
            let _pass = tracing::trace_span!("fit_wrap").entered();
            fit_wrap::distribute(self);
        }
        {
            let _pass = tracing::trace_span!("flex_lines").entered();
            flex_lines::partition(self, &order, measure);
        }
        {
            let _pass = tracing::trace_span!("position").entered();
            position::place(self);
        }
        {
            let _pass = tracing::trace_span!("transforms").entered();
            position::resolve_transforms(self);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NodeId;
    use crate::types::{Dimension, FlexAlign, FlexDir, FlexWrap};
    use kurbo::Affine;
    use taffy::geometry::{Point, Size};

    fn setup() -> (Tree, NodeId) {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.style_mut(root).unwrap().set_size(200.0, 100.0);
        (tree, root)
    }

    fn fixed(tree: &mut Tree, parent: NodeId, name: &str, w: f32, h: f32) -> NodeId {
        let id = tree.create_box_with(name, |s| {
            s.set_size(w, h);
        });
        tree.append(parent, id);
        id
    }

    #[test]
    fn test_column_stacks_children() {
        let (mut tree, root) = setup();
        let a = fixed(&mut tree, root, "a", 50.0, 20.0);
        let b = fixed(&mut tree, root, "b", 30.0, 10.0);
        tree.layout(&mut CellMeasure::default());
        assert_eq!(tree[a].output().pos, Point { x: 0.0, y: 0.0 });
        assert_eq!(tree[b].output().pos, Point { x: 0.0, y: 20.0 });
    }

    #[test]
    fn test_row_center_and_end() {
        let (mut tree, root) = setup();
        tree.style_mut(root).unwrap().set_flex_dir(FlexDir::Row).set_flex_align(FlexAlign::Center);
        let a = fixed(&mut tree, root, "a", 50.0, 20.0);
        let b = fixed(&mut tree, root, "b", 50.0, 20.0);
        tree.layout(&mut CellMeasure::default());
        assert_eq!(tree[a].output().pos.x, 50.0);
        assert_eq!(tree[b].output().pos.x, 100.0);

        tree.style_mut(root)
            .unwrap()
            .set_flex_align(FlexAlign::End)
            .set_items_align(FlexAlign::End);
        tree.layout(&mut CellMeasure::default());
        assert_eq!(tree[a].output().pos, Point { x: 100.0, y: 80.0 });
    }

    #[test]
    fn test_padding_offsets_children() {
        let (mut tree, root) = setup();
        tree.style_mut(root).unwrap().set_padding(7.0);
        let a = fixed(&mut tree, root, "a", 10.0, 10.0);
        tree.style_mut(a).unwrap().set_margin(3.0);
        tree.layout(&mut CellMeasure::default());
        assert_eq!(tree[a].output().pos, Point { x: 7.0, y: 7.0 });
        assert_eq!(tree[a].output().rect_pos(), Point { x: 10.0, y: 10.0 });
    }

    #[test]
    fn test_overflow_and_scroll_clamp() {
        let (mut tree, root) = setup();
        fixed(&mut tree, root, "tall", 10.0, 150.0);
        tree.style_mut(root).unwrap().vscroll = -500.0;
        tree.layout(&mut CellMeasure::default());
        assert_eq!(tree[root].output().content_overflow.height, 50.0);
        assert_eq!(tree[root].style.vscroll, -50.0);
    }

    #[test]
    fn test_scroll_translates_children() {
        let (mut tree, root) = setup();
        let a = fixed(&mut tree, root, "a", 10.0, 150.0);
        tree.style_mut(root).unwrap().vscroll = -20.0;
        tree.layout(&mut CellMeasure::default());
        let rect = tree[a].output().screen_rect();
        assert_eq!(rect, kurbo::Rect::new(0.0, -20.0, 10.0, 130.0));
    }

    #[test]
    fn test_screen_transform_mode() {
        let (mut tree, root) = setup();
        let a = fixed(&mut tree, root, "a", 10.0, 10.0);
        let b = fixed(&mut tree, root, "b", 10.0, 10.0);
        tree.style_mut(b).unwrap().set_screen_transform(Affine::translate((100.0, 0.0)));
        tree.layout(&mut CellMeasure::default());
        assert_eq!(tree[b].output().pos, Point::ZERO);
        assert_eq!(tree[b].output().screen_rect(), kurbo::Rect::new(100.0, 0.0, 110.0, 10.0));
        assert_eq!(tree[a].output().screen_rect(), kurbo::Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_fit_wrap_text_shares_row() {
        let (mut tree, root) = setup();
        let row = tree.create_box_with("row", |s| {
            s.set_flex_dir(FlexDir::Row).set_size(Dimension::parent(1.0), Dimension::fit_content());
        });
        tree.append(root, row);
        fixed(&mut tree, row, "icon", 40.0, 10.0);
        let text = tree.create_text("label", "aaaa bbbb cccc dddd eeee ffff");
        tree.append(row, text);

        // 10px cells: the text wants 290px but only 160px remain beside the
        // icon, so it wraps to two 140px lines.
        let mut measure = CellMeasure::new(0.5, 1.0);
        tree.layout(&mut measure);
        let out = tree[text].output();
        assert_eq!(out.layout_size.width, 140.0);
        assert_eq!(out.content_size.width, 140.0);
        assert_eq!(out.content_size.height, 40.0);
        assert_eq!(tree[row].output().layout_size.height, 40.0);
        assert_eq!(out.pos.x, 40.0);
    }

    #[test]
    fn test_wrap_content_align_center() {
        let (mut tree, root) = setup();
        tree.style_mut(root).unwrap()
            .set_flex_dir(FlexDir::Row)
            .set_flex_wrap(FlexWrap::Wrap)
            .set_content_align(FlexAlign::Center);
        let a = fixed(&mut tree, root, "a", 120.0, 20.0);
        let b = fixed(&mut tree, root, "b", 120.0, 20.0);
        tree.layout(&mut CellMeasure::default());
        // Two lines of 20 in a 100 tall area: block starts at 30.
        assert_eq!(tree[a].output().pos, Point { x: 0.0, y: 30.0 });
        assert_eq!(tree[b].output().pos, Point { x: 0.0, y: 50.0 });
        assert_eq!(tree[root].output().flex_lines.len(), 2);
        assert_eq!(tree[root].output().content_size, Size { width: 120.0, height: 40.0 });
    }

    #[test]
    fn test_wrap_self_align_within_line() {
        let (mut tree, root) = setup();
        let wrap = tree.create_box_with("wrap", |s| {
            s.set_flex_dir(FlexDir::Row).set_flex_wrap(FlexWrap::Wrap).set_size(100.0, 100.0);
        });
        tree.append(root, wrap);
        let a = fixed(&mut tree, wrap, "a", 40.0, 10.0);
        fixed(&mut tree, wrap, "b", 40.0, 30.0);
        let c = fixed(&mut tree, wrap, "c", 40.0, 10.0);
        fixed(&mut tree, wrap, "d", 40.0, 20.0);
        tree.style_mut(a).unwrap().set_self_align(FlexAlign::End);
        tree.style_mut(c).unwrap().set_self_align(FlexAlign::Center);
        tree.layout(&mut CellMeasure::default());

        // Lines are 30 and 20 tall; each child aligns against its own line.
        assert_eq!(tree[a].output().pos, Point { x: 0.0, y: 20.0 });
        assert_eq!(tree[c].output().pos, Point { x: 0.0, y: 35.0 });
    }

    #[test]
    fn test_horizontal_overflow_clamp() {
        let (mut tree, root) = setup();
        let list = tree.create_box_with("list", |s| {
            s.set_flex_dir(FlexDir::Row).set_size(50.0, 20.0);
        });
        tree.append(root, list);
        let item = fixed(&mut tree, list, "item", 100.0, 20.0);
        tree.style_mut(list).unwrap().hscroll = -500.0;
        tree.layout(&mut CellMeasure::default());

        assert_eq!(tree[list].output().content_overflow.width, 50.0);
        assert_eq!(tree[list].style.hscroll, -50.0);
        assert_eq!(tree[item].output().screen_rect().x0, -50.0);
    }
}
