use std::cell::Cell;
use std::rc::Rc;

use boxflow::{
    Axis, CellMeasure, FlexDir, MouseButton, MouseState, NodeId, PointerEvent, Rgba, Tree,
};

type Counter = Rc<Cell<u32>>;

fn counter() -> Counter {
    Rc::new(Cell::new(0))
}

fn notify(count: &Counter) -> Option<boxflow::NotifyHandler> {
    let count = count.clone();
    Some(Rc::new(move |_: &mut Tree, _: &PointerEvent| count.set(count.get() + 1)))
}

fn bubble(count: &Counter) -> Option<boxflow::BubbleHandler> {
    let count = count.clone();
    Some(Rc::new(move |_: &mut Tree, _: &PointerEvent| {
        count.set(count.get() + 1);
        true
    }))
}

/// root Row 200x100 -> [a 50x50, b 50x50]
fn setup() -> (Tree, NodeId, NodeId) {
    let mut tree = Tree::new();
    let root = tree.root();
    tree.style_mut(root).unwrap().set_size(200.0, 100.0).set_flex_dir(FlexDir::Row);
    let a = tree.create_box_with("a", |s| {
        s.set_size(50.0, 50.0);
    });
    let b = tree.create_box_with("b", |s| {
        s.set_size(50.0, 50.0);
    });
    tree.append(root, a);
    tree.append(root, b);
    tree.layout(&mut CellMeasure::default());
    (tree, a, b)
}

#[test]
fn test_point_inside_rect_and_parent_clip() {
    let mut tree = Tree::new();
    let root = tree.root();
    tree.style_mut(root).unwrap().set_size(100.0, 100.0).set_padding(10.0);
    let node = tree.create_box_with("node", |s| {
        s.set_size(40.0, 40.0);
    });
    tree.append(root, node);
    tree.layout(&mut CellMeasure::default());

    assert_eq!(tree[node].output().screen_rect(), kurbo::Rect::new(10.0, 10.0, 50.0, 50.0));
    assert!(tree.point_inside(node, 30.0, 30.0));
    assert!(!tree.point_inside(node, 5.0, 5.0));

    // Same node inside a 15x15 parent that excludes (30, 30).
    let frame = tree.create_box_with("frame", |s| {
        s.set_size(15.0, 15.0);
    });
    tree.append(root, frame);
    tree.append(frame, node);
    tree.layout(&mut CellMeasure::default());
    assert_eq!(tree[node].output().screen_rect(), kurbo::Rect::new(10.0, 10.0, 50.0, 50.0));
    assert!(!tree.point_inside(node, 30.0, 30.0));

    tree.style_mut(node).unwrap().set_clip(false);
    tree.layout(&mut CellMeasure::default());
    assert!(tree.point_inside(node, 30.0, 30.0));
}

#[test]
fn test_enter_once_inside_many_leave_once() {
    let (mut tree, a, _) = setup();
    let (enter, inside, leave) = (counter(), counter(), counter());
    let handlers = tree.handlers_mut(a).unwrap();
    handlers.on_enter = notify(&enter);
    handlers.on_inside = notify(&inside);
    handlers.on_leave = notify(&leave);

    tree.pointer_move(10.0, 10.0);
    tree.pointer_move(20.0, 10.0);
    tree.pointer_move(30.0, 30.0);
    assert_eq!((enter.get(), inside.get(), leave.get()), (1, 3, 0));
    assert!(tree[a].mouse().contains(MouseState::INSIDE | MouseState::OVER));

    tree.pointer_move(150.0, 80.0);
    tree.pointer_move(160.0, 80.0);
    assert_eq!((enter.get(), inside.get(), leave.get()), (1, 3, 1));
    assert!(tree[a].mouse().is_empty());
}

#[test]
fn test_release_outside_press_is_click_out() {
    let (mut tree, a, b) = setup();
    let root = tree.root();
    let (click_in, click_out, root_click_out) = (counter(), counter(), counter());
    let handlers = tree.handlers_mut(a).unwrap();
    handlers.on_click_in = bubble(&click_in);
    handlers.on_click_out = bubble(&click_out);
    tree.handlers_mut(root).unwrap().on_click_out = bubble(&root_click_out);

    tree.pointer_move(10.0, 10.0);
    tree.pointer_down(MouseButton::Left, 10.0, 10.0);
    assert_eq!(tree.pressed(), Some(a));
    assert!(tree[a].mouse().contains(MouseState::DOWN));

    tree.pointer_move(60.0, 10.0);
    assert_eq!(tree.hovered(), Some(b));
    tree.pointer_up(MouseButton::Left, 60.0, 10.0);

    assert_eq!(click_out.get(), 1);
    assert_eq!(root_click_out.get(), 1);
    assert_eq!(click_in.get(), 0);
    assert!(!tree[a].mouse().contains(MouseState::DOWN));
    assert_eq!(tree.pressed(), None);
}

#[test]
fn test_click_handler_mutates_tree() {
    let (mut tree, a, _) = setup();
    let paint_red = |tree: &mut Tree, event: &PointerEvent| {
        if let Some(style) = tree.style_mut(event.node) {
            style.set_color(Rgba::RED);
        }
        false
    };
    tree.handlers_mut(a).unwrap().on_click_in = Some(Rc::new(paint_red));

    tree.pointer_move(10.0, 10.0);
    tree.pointer_down(MouseButton::Left, 10.0, 10.0);
    tree.pointer_up(MouseButton::Left, 10.0, 10.0);
    assert_eq!(tree.style(a).map(|s| s.color), Some(Rgba::RED));
}

#[test]
fn test_wheel_clamps_at_overflow() {
    let mut tree = Tree::new();
    let root = tree.root();
    tree.style_mut(root).unwrap().set_size(100.0, 100.0);
    let list = tree.create_box_with("list", |s| {
        s.set_size(100.0, 50.0);
    });
    let item = tree.create_box_with("item", |s| {
        s.set_size(100.0, 100.0);
    });
    tree.append(root, list);
    tree.append(list, item);
    tree.layout(&mut CellMeasure::default());
    tree.pointer_move(10.0, 10.0);

    assert_eq!(tree.max_scroll(list, Axis::Vertical), 50.0);
    assert_eq!(tree.scroll_offset(list).1, 0.0);
    assert_eq!(tree.scroll_vertical(-80.0), Some(list));
    assert_eq!(tree.scroll_offset(list).1, -50.0);
    tree.scroll_vertical(-10.0);
    assert_eq!(tree.scroll_offset(list).1, -50.0);
}
