use boxflow::{
    CellMeasure, Dimension, DisplayMode, FlexDir, FlexLine, FlexWrap, NodeId, NodeOutput, Tree,
};
use taffy::geometry::Size;

fn setup() -> (Tree, NodeId) {
    let mut tree = Tree::new();
    let root = tree.root();
    tree.style_mut(root).unwrap().set_size(400.0, 300.0);
    (tree, root)
}

fn fixed(tree: &mut Tree, parent: NodeId, name: &str, w: f32, h: f32) -> NodeId {
    let id = tree.create_box_with(name, |s| {
        s.set_size(w, h);
    });
    tree.append(parent, id);
    id
}

fn outputs(tree: &Tree) -> Vec<(NodeId, NodeOutput)> {
    let mut all = Vec::new();
    tree.dfs(tree.root(), |id, node| {
        all.push((id, node.output().clone()));
        boxflow::Traverse::Continue
    });
    all
}

#[test]
fn test_fixed_size_without_margin() {
    let (mut tree, root) = setup();
    let a = fixed(&mut tree, root, "a", 100.0, 50.0);
    tree.layout(&mut CellMeasure::default());

    let out = tree[a].output();
    assert_eq!(out.rect_size, Size { width: 100.0, height: 50.0 });
    assert_eq!(out.layout_size, out.rect_size);
}

#[test]
fn test_fit_content_row_sums_children() {
    let (mut tree, root) = setup();
    let row = tree.create_box_with("row", |s| {
        s.set_flex_dir(FlexDir::Row)
            .set_size(Dimension::fit_content(), Dimension::fit_content())
            .set_margin(2.0)
            .set_padding(3.0);
    });
    tree.append(root, row);
    fixed(&mut tree, row, "a", 30.0, 10.0);
    fixed(&mut tree, row, "b", 70.0, 20.0);
    tree.layout(&mut CellMeasure::default());

    let out = tree[row].output();
    assert_eq!(out.content_size, Size { width: 100.0, height: 20.0 });
    assert_eq!(out.layout_size, Size { width: 110.0, height: 30.0 });
    assert_eq!(out.rect_size, Size { width: 106.0, height: 26.0 });
}

#[test]
fn test_wrap_breaks_lines_greedily() {
    let (mut tree, root) = setup();
    let row = tree.create_box_with("row", |s| {
        s.set_flex_dir(FlexDir::Row).set_flex_wrap(FlexWrap::Wrap).set_size(100.0, 100.0);
    });
    tree.append(root, row);
    let c1 = fixed(&mut tree, row, "c1", 40.0, 10.0);
    let c2 = fixed(&mut tree, row, "c2", 40.0, 20.0);
    let c3 = fixed(&mut tree, row, "c3", 40.0, 10.0);
    tree.layout(&mut CellMeasure::default());

    assert_eq!(
        tree[row].output().flex_lines,
        vec![
            FlexLine { start: 0, end: 2, width: 80.0, height: 20.0 },
            FlexLine { start: 2, end: 3, width: 40.0, height: 10.0 },
        ]
    );
    assert_eq!(tree[c2].output().pos.x, tree[c1].output().pos.x + 40.0);
    assert_eq!(tree[c3].output().pos.y, 20.0);
}

#[test]
fn test_parent_sizing_uses_padded_area() {
    let (mut tree, root) = setup();
    tree.style_mut(root).unwrap().set_padding(10.0);
    let half = tree.create_box_with("half", |s| {
        s.set_size(Dimension::parent(0.5), Dimension::parent(1.0)).set_margin(5.0);
    });
    tree.append(root, half);
    tree.layout(&mut CellMeasure::default());

    let out = tree[half].output();
    assert_eq!(out.layout_size, Size { width: 190.0, height: 280.0 });
    assert_eq!(out.rect_size, Size { width: 180.0, height: 270.0 });
}

#[test]
fn test_collapsed_takes_no_space() {
    let (mut tree, root) = setup();
    let gone = fixed(&mut tree, root, "gone", 50.0, 50.0);
    tree.style_mut(gone).unwrap().set_display_mode(DisplayMode::Collapsed);
    let next = fixed(&mut tree, root, "next", 50.0, 50.0);
    tree.layout(&mut CellMeasure::default());

    assert_eq!(tree[gone].output().layout_size, Size::ZERO);
    assert_eq!(tree[next].output().pos.y, 0.0);
}

#[test]
fn test_layout_is_idempotent() {
    let (mut tree, root) = setup();
    let list = tree.create_box_with("list", |s| {
        s.set_size(200.0, 60.0).set_padding(4.0);
    });
    tree.append(root, list);
    for i in 0..5 {
        fixed(&mut tree, list, &format!("item{i}"), 180.0, 30.0);
    }
    let row = tree.create_box_with("row", |s| {
        s.set_flex_dir(FlexDir::Row).set_size(Dimension::parent(1.0), Dimension::fit_content());
    });
    tree.append(root, row);
    let text = tree.create_text("label", "some words that will need to wrap onto more lines");
    tree.append(row, text);
    tree.style_mut(list).unwrap().vscroll = -1000.0;

    let mut measure = CellMeasure::new(0.5, 1.0);
    tree.layout(&mut measure);
    let first = outputs(&tree);
    tree.layout(&mut measure);
    assert_eq!(outputs(&tree), first);
}
