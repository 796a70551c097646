//! Terminal demo - a scrolling list driven by crossterm mouse input.
//!
//! Each terminal cell is one layout unit. Hover a row to highlight it, click
//! to toggle it, use the wheel to scroll, press `q` to quit.
//!
//! ```text
//! RUST_LOG=boxflow=debug cargo run --example terminal 2>trace.log
//! ```

use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use boxflow::{
    App, CellMeasure, Config, Dimension, FlexAlign, FlexDir, NodeId, Painter, PointerEvent, Rgba,
    TextRun, Tree, input,
};
use crossterm::event::{self, Event, KeyCode};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use kurbo::{Affine, RoundedRect};
use tracing_subscriber::EnvFilter;

const IDLE: Rgba = Rgba::rgb(0.15, 0.15, 0.2);
const HOVER: Rgba = Rgba::rgb(0.3, 0.3, 0.45);
const ACTIVE: Rgba = Rgba::rgb(0.2, 0.5, 0.3);

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (width, height) = terminal::size()?;
    let config = Config {
        screen_width: width as u32,
        screen_height: height as u32,
        scroll_step: 1.0,
        ..Config::default()
    };
    let mut app = App::with_measure(config, CellMeasure::terminal());
    build(app.tree_mut());

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    input::enable_mouse()?;

    let result = run(&mut app, &mut stdout);

    input::disable_mouse()?;
    execute!(stdout, ResetColor, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(app: &mut App, stdout: &mut Stdout) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            let mut painter = CellPainter::new(stdout, app.screen().width, app.screen().height);
            app.frame(&mut painter);
            painter.finish()?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        let event = event::read()?;
        if let Event::Key(key) = &event {
            if key.code == KeyCode::Char('q') {
                return Ok(());
            }
        }
        dirty |= app.handle(input::convert_event(event));
    }
}

/// root -> [header -> title, list -> rows]
fn build(tree: &mut Tree) {
    let root = tree.root();
    if let Some(style) = tree.style_mut(root) {
        style.set_color(Rgba::BLACK);
    }

    let header = tree.create_box_with("header", |s| {
        s.set_flex_dir(FlexDir::Row)
            .set_size(Dimension::parent(1.0), 3.0)
            .set_padding(1.0)
            .set_color(Rgba::rgb(0.1, 0.2, 0.4));
    });
    let title = tree.create_text("title", "boxflow  |  hover, click, scroll  |  q quits");
    if let Some(style) = tree.style_mut(title) {
        style.set_color(Rgba::WHITE);
    }
    tree.append(root, header);
    tree.append(header, title);

    let list = tree.create_box_with("list", |s| {
        s.set_size(Dimension::parent(1.0), Dimension::parent(1.0))
            .set_padding_row(2.0)
            .set_items_align(FlexAlign::Center);
    });
    tree.append(root, list);

    for i in 0..40 {
        let row = tree.create_box_with(format!("row{i}"), |s| {
            s.set_size(Dimension::parent(0.8), Dimension::fit_content())
                .set_margin_col(1.0)
                .set_color(IDLE);
        });
        let label = tree.create_text("label", format!("row {i:02}"));
        if let Some(style) = tree.style_mut(label) {
            style.set_color(Rgba::WHITE);
        }
        tree.append(list, row);
        tree.append(row, label);
        hook(tree, row);
    }
}

fn hook(tree: &mut Tree, row: NodeId) {
    let Some(handlers) = tree.handlers_mut(row) else {
        return;
    };
    handlers.on_enter = Some(Rc::new(|tree: &mut Tree, e: &PointerEvent| {
        if let Some(style) = tree.style_mut(e.node) {
            if style.color == IDLE {
                style.set_color(HOVER);
            }
        }
    }));
    handlers.on_leave = Some(Rc::new(|tree: &mut Tree, e: &PointerEvent| {
        if let Some(style) = tree.style_mut(e.node) {
            if style.color == HOVER {
                style.set_color(IDLE);
            }
        }
    }));
    handlers.on_click_in = Some(Rc::new(|tree: &mut Tree, e: &PointerEvent| {
        if let Some(style) = tree.style_mut(e.node) {
            let next = if style.color == ACTIVE { HOVER } else { ACTIVE };
            style.set_color(next);
        }
        false
    }));
}

// =============================================================================
// CELL PAINTER
// =============================================================================

/// Paints fills and text into terminal cells. Transforms are reduced to
/// their bounding boxes.
struct CellPainter<'a> {
    out: &'a mut Stdout,
    clips: Vec<kurbo::Rect>,
    error: Option<io::Error>,
}

impl<'a> CellPainter<'a> {
    fn new(out: &'a mut Stdout, width: f32, height: f32) -> Self {
        let screen = kurbo::Rect::new(0.0, 0.0, width as f64, height as f64);
        Self { out, clips: vec![screen], error: None }
    }

    fn clip(&self) -> kurbo::Rect {
        self.clips.last().copied().unwrap_or(kurbo::Rect::ZERO)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    fn fill(&mut self, rect: kurbo::Rect, color: Rgba) -> io::Result<()> {
        let rect = rect.intersect(self.clip()).round();
        if rect.width() <= 0.0 || rect.height() <= 0.0 || color.is_transparent() {
            return Ok(());
        }
        let blank = " ".repeat(rect.width() as usize);
        queue!(self.out, SetBackgroundColor(color_of(color)))?;
        for y in rect.y0 as u16..rect.y1 as u16 {
            queue!(self.out, cursor::MoveTo(rect.x0 as u16, y), Print(&blank))?;
        }
        Ok(())
    }

    fn text(&mut self, run: &TextRun<'_>, transform: Affine) -> io::Result<()> {
        let clip = self.clip();
        let origin = transform * run.origin;
        let width = run.max_width.max(0.0) as usize;
        // Background is left as the enclosing fill set it.
        queue!(self.out, SetForegroundColor(color_of(run.color)))?;
        for (row, line) in boxflow::wrap_text(run.text, width).iter().enumerate() {
            let y = (origin.y + row as f64).round();
            if y < clip.y0 || y >= clip.y1 {
                continue;
            }
            let x0 = origin.x.round().max(clip.x0);
            let visible: String = line
                .chars()
                .skip((x0 - origin.x.round()) as usize)
                .take((clip.x1 - x0).max(0.0) as usize)
                .collect();
            queue!(self.out, cursor::MoveTo(x0 as u16, y as u16), Print(visible))?;
        }
        Ok(())
    }
}

impl Painter for CellPainter<'_> {
    fn push_clip(&mut self, rect: kurbo::Rect, transform: Affine) {
        let clip = transform.transform_rect_bbox(rect).intersect(self.clip());
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        if self.clips.len() > 1 {
            self.clips.pop();
        }
    }

    fn fill_rect(&mut self, _node: NodeId, rect: RoundedRect, transform: Affine, color: Rgba) {
        let result = self.fill(transform.transform_rect_bbox(rect.rect()), color);
        self.record(result);
    }

    fn draw_image(&mut self, _: NodeId, _: boxflow::ImageId, _: kurbo::Rect, _: Affine) {}

    fn draw_text(&mut self, _node: NodeId, run: &TextRun<'_>, transform: Affine) {
        let result = self.text(run, transform);
        self.record(result);
    }
}

fn color_of(color: Rgba) -> Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb { r: channel(color.r), g: channel(color.g), b: channel(color.b) }
}
