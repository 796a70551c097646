//! # Layout Benchmark
//!
//! Full layout of a scrolling list of wrapped text rows, plus a hit test
//! sweep over the result.
//!
//! Run with: `cargo bench --bench layout`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use boxflow::{CellMeasure, Dimension, FlexDir, FlexWrap, Tree};

/// root -> list -> rows x [icon, label]
fn build(rows: usize) -> Tree {
    let mut tree = Tree::new();
    let root = tree.root();
    tree.style_mut(root).unwrap().set_size(800.0, 600.0);
    let list = tree.create_box_with("list", |s| {
        s.set_size(Dimension::parent(1.0), Dimension::parent(1.0)).set_padding(8.0);
    });
    tree.append(root, list);

    for i in 0..rows {
        let row = tree.create_box_with(format!("row{i}"), |s| {
            s.set_flex_dir(FlexDir::Row)
                .set_flex_wrap(FlexWrap::Wrap)
                .set_size(Dimension::parent(1.0), Dimension::fit_content())
                .set_margin_col(2.0);
        });
        let icon = tree.create_box_with("icon", |s| {
            s.set_size(24.0, 24.0);
        });
        let text = "the quick brown fox jumps over the lazy dog ".repeat(i % 4 + 1);
        let label = tree.create_text("label", text);
        tree.append(list, row);
        tree.append(row, icon);
        tree.append(row, label);
    }
    tree
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for rows in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let mut tree = build(rows);
            let mut measure = CellMeasure::default();
            b.iter(|| {
                tree.layout(&mut measure);
                black_box(tree.len())
            });
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut tree = build(100);
    tree.layout(&mut CellMeasure::default());
    c.bench_function("hit_test_100_rows", |b| {
        b.iter(|| {
            for y in (0..600).step_by(10) {
                black_box(tree.hit_test(black_box(100.0), y as f32));
            }
        });
    });
}

criterion_group!(benches, bench_layout, bench_hit_test);
criterion_main!(benches);
