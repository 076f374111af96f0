//! Wrapped text measurement.
//!
//! [`ApproxMeasurer`] is deterministic and font-file free: it uses Helvetica advance widths for
//! ASCII and a greedy word wrap that breaks inside a word only when the word alone is wider than
//! the line. That matches how platform labels wrap closely enough for layout linting.

use crate::foundation::core::Size;
use crate::text::metrics::FontMetrics;

/// Wrapped size of a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Widest line and total height.
    pub size: Size,
    /// Number of laid-out lines.
    pub lines: usize,
}

impl TextExtent {
    /// Lines implied by the height, `ceil(height / line_height)`.
    ///
    /// A tiny tolerance keeps `n * line_height / line_height` from rounding up to `n + 1`.
    pub fn lines_for(&self, line_height: f64) -> usize {
        if line_height <= 0.0 || self.size.height <= 0.0 {
            return 0;
        }
        (self.size.height / line_height - 1e-9).ceil().max(0.0) as usize
    }
}

/// Computes the bounding size of `text` wrapped to `max_width`.
pub trait TextMeasurer {
    /// Measure `text` laid out in `font` with lines no wider than `max_width`.
    fn measure(&self, text: &str, font: &FontMetrics, max_width: f64) -> TextExtent;
}

/// Font-file free measurer built on fixed advance-width tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMeasurer;

impl ApproxMeasurer {
    /// Create the measurer.
    pub fn new() -> Self {
        Self
    }

    /// Advance width of a single line without wrapping.
    pub fn line_width(&self, text: &str, font: &FontMetrics) -> f64 {
        text.chars().map(|c| advance(c, font)).sum()
    }
}

impl TextMeasurer for ApproxMeasurer {
    fn measure(&self, text: &str, font: &FontMetrics, max_width: f64) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let max_width = max_width.max(0.0);
        let mut wrap = Wrap::new(max_width);
        for paragraph in text.split('\n') {
            wrap.paragraph(paragraph.trim_end_matches('\r'), font);
        }
        TextExtent {
            size: Size::new(wrap.widest, wrap.lines as f64 * font.line_height),
            lines: wrap.lines,
        }
    }
}

const EPS: f64 = 1e-9;

struct Wrap {
    max_width: f64,
    lines: usize,
    widest: f64,
    // Width up to the end of the last placed glyph, excluding hanging spaces.
    visible: f64,
    // Width including trailing spaces.
    pen: f64,
    line_open: bool,
}

impl Wrap {
    fn new(max_width: f64) -> Self {
        Self {
            max_width,
            lines: 0,
            widest: 0.0,
            visible: 0.0,
            pen: 0.0,
            line_open: false,
        }
    }

    fn paragraph(&mut self, paragraph: &str, font: &FontMetrics) {
        self.open_line();
        for segment in paragraph.split_inclusive(' ') {
            let word = segment.trim_end_matches(' ');
            let spaces = segment.len() - word.len();
            let word_width: f64 = word.chars().map(|c| advance(c, font)).sum();
            let space_width = spaces as f64 * advance(' ', font);
            if word.is_empty() {
                self.pen += space_width;
                continue;
            }

            if self.pen + word_width <= self.max_width + EPS || self.pen == 0.0 {
                if word_width > self.max_width + EPS {
                    self.place_broken(word, font);
                } else {
                    self.visible = self.pen + word_width;
                    self.pen = self.visible;
                }
            } else {
                self.close_line();
                self.open_line();
                if word_width > self.max_width + EPS {
                    self.place_broken(word, font);
                } else {
                    self.visible = word_width;
                    self.pen = word_width;
                }
            }
            // Spaces hang past the line end and never force a break on their own.
            self.pen += space_width;
        }
        self.close_line();
    }

    fn place_broken(&mut self, word: &str, font: &FontMetrics) {
        for c in word.chars() {
            let w = advance(c, font);
            if self.visible + w > self.max_width + EPS && self.visible > 0.0 {
                self.close_line();
                self.open_line();
            }
            self.visible += w;
            self.pen = self.visible;
        }
    }

    fn open_line(&mut self) {
        self.visible = 0.0;
        self.pen = 0.0;
        self.line_open = true;
    }

    fn close_line(&mut self) {
        if !self.line_open {
            return;
        }
        self.lines += 1;
        self.widest = self.widest.max(self.visible);
        self.line_open = false;
    }
}

fn advance(c: char, font: &FontMetrics) -> f64 {
    let units = if c == '\t' {
        4.0 * ascii_units(' ', font.bold)
    } else if c.is_ascii() && !c.is_ascii_control() {
        ascii_units(c, font.bold)
    } else if c.is_control() {
        0.0
    } else if is_wide(c) {
        1000.0
    } else {
        556.0
    };
    units / 1000.0 * font.point_size
}

fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{A4CF}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{1F300}'..='\u{1FAFF}'
        | '\u{20000}'..='\u{3FFFD}')
}

// Advance widths in 1/1000 em for printable ASCII (0x20..=0x7E).
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // p..~
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn ascii_units(c: char, bold: bool) -> f64 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let idx = (c as usize).saturating_sub(0x20);
    f64::from(table.get(idx).copied().unwrap_or(556))
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
