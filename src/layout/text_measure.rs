//! Text Measurement
//!
//! Layout asks a [`TextMeasure`] for two things: the unconstrained size of a
//! text run, and its size when wrapped to a maximum width.
//!
//! [`CellMeasure`] is the built-in implementation. It measures in monospace
//! cells using `unicode-width`:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Emoji: 2 cells (most)
//! - Zero-width characters: 0 cells
//!
//! and word-wraps on `unicode-segmentation` word boundaries. One cell is
//! `font_size * advance` wide and one line `font_size * line_height` tall.

use taffy::geometry::Size;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::engine::DEFAULT_FONT_SIZE;

/// Text metrics provider.
pub trait TextMeasure {
    /// Size of `text` laid out without a width limit.
    fn measure(&mut self, text: &str, font_size: f32) -> Size<f32>;

    /// Longest line width and total height of `text` wrapped at `max_width`.
    fn measure_wrapped(&mut self, text: &str, font_size: f32, max_width: f32) -> Size<f32>;
}

// =============================================================================
// Cell Widths
// =============================================================================

/// Display width of a string in cells.
pub fn string_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Width of one grapheme cluster, capped at 2 so ZWJ sequences count once.
fn grapheme_width(g: &str) -> usize {
    g.width().min(2)
}

/// Word-wrap text to at most `width` cells per line.
///
/// Explicit newlines always break. Words longer than `width` are split on
/// grapheme boundaries. Trailing whitespace is dropped from wrapped lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0usize;
        // Whitespace is kept at the start of a paragraph, dropped after a wrap.
        let mut continuation = false;

        for word in paragraph.split_word_bounds() {
            let word_width = string_width(word);
            let is_space = word.chars().all(char::is_whitespace);

            if is_space && continuation && line.is_empty() {
                continue;
            }
            if line_width + word_width <= width {
                line.push_str(word);
                line_width += word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line).trim_end().to_string());
                line_width = 0;
                continuation = true;
            }
            if is_space {
                continue;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for g in word.graphemes(true) {
                let gw = grapheme_width(g);
                if line_width + gw > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                    continuation = true;
                }
                line.push_str(g);
                line_width += gw;
            }
        }

        lines.push(line.trim_end().to_string());
    }

    lines
}

// =============================================================================
// Cell Measure
// =============================================================================

/// Monospace cell metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMeasure {
    /// Cell width as a fraction of font size.
    pub advance: f32,
    /// Line height as a fraction of font size.
    pub line_height: f32,
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.2 }
    }
}

impl CellMeasure {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }

    /// One unit per column and per row at the default font size, so terminal
    /// cells can be used as pixels.
    pub fn terminal() -> Self {
        let unit = 1.0 / DEFAULT_FONT_SIZE;
        Self { advance: unit, line_height: unit }
    }

    fn size_of(&self, lines: &[String], font_size: f32) -> Size<f32> {
        let longest = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        Size {
            width: longest as f32 * font_size * self.advance,
            height: lines.len() as f32 * font_size * self.line_height,
        }
    }
}

impl TextMeasure for CellMeasure {
    fn measure(&mut self, text: &str, font_size: f32) -> Size<f32> {
        if text.is_empty() {
            return Size::ZERO;
        }
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        self.size_of(&lines, font_size)
    }

    fn measure_wrapped(&mut self, text: &str, font_size: f32, max_width: f32) -> Size<f32> {
        let cell = font_size * self.advance;
        let max_cells = if cell > 0.0 {
            (max_width / cell).floor().max(0.0) as usize
        } else {
            usize::MAX
        };
        let lines = wrap_text(text, max_cells);
        self.size_of(&lines, font_size)
    }
}

// =============================================================================
// TESTS
// =============================================================================
