//! WCAG 2.x relative luminance and contrast ratio.
//!
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use crate::color::def::Color;

/// Minimum ratio for regular text (below 18pt and not bold).
pub const MIN_RATIO_REGULAR: f64 = 4.5;
/// Minimum ratio for large (18pt and up) or bold text.
pub const MIN_RATIO_LARGE: f64 = 3.0;
/// Point size from which text counts as large.
pub const LARGE_TEXT_POINT_SIZE: f64 = 18.0;

fn linearize(c: f64) -> f64 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    /// WCAG relative luminance of the RGB channels (alpha is ignored).
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio between `self` and `other`, in `1..=21`.
    pub fn contrast_ratio(self, other: Color) -> f64 {
        contrast_ratio(self, other)
    }

    /// Source-over composite of `self` onto an opaque `background`.
    pub fn over(self, background: Color) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: f64, bg: f64| fg * a + bg * (1.0 - a);
        Color::rgba(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
            1.0,
        )
    }
}

/// WCAG contrast ratio: `(L_light + 0.05) / (L_dark + 0.05)`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (light, dark) = if la >= lb { (la, lb) } else { (lb, la) };
    (light + 0.05) / (dark + 0.05)
}

/// Whether `ratio` is enough for text of the given size and weight.
///
/// Large (>= 18pt) or bold text needs 3:1, everything else 4.5:1.
pub fn is_sufficient(ratio: f64, point_size: f64, bold: bool) -> bool {
    let large_or_bold = point_size >= LARGE_TEXT_POINT_SIZE || bold;
    (large_or_bold && ratio >= MIN_RATIO_LARGE)
        || (point_size < LARGE_TEXT_POINT_SIZE && ratio >= MIN_RATIO_REGULAR)
}

/// Channel-wise mean of `colors`, or `None` when empty.
pub fn average(colors: &[Color]) -> Option<Color> {
    if colors.is_empty() {
        return None;
    }
    let n = colors.len() as f64;
    let (r, g, b, a) = colors.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, c| {
        (acc.0 + c.r, acc.1 + c.g, acc.2 + c.b, acc.3 + c.a)
    });
    Some(Color::rgba(r / n, g / n, b / n, a / n))
}

#[cfg(test)]
#[path = "../../tests/unit/color/contrast.rs"]
mod tests;
