//! Rectangle helpers shared by the geometric checks.
//!
//! All rects are in the single global (window) coordinate space produced by the scene walker.

use crate::foundation::core::{Rect, Size};

/// `true` when `a` and `b` share an area larger than zero.
///
/// Rects that merely touch along an edge, and zero-sized rects, never overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    let i = a.intersect(b);
    i.width() > 0.0 && i.height() > 0.0
}

/// `true` when `rect` reaches outside `container` in any direction.
///
/// Defined by union: the container grows when unioned with anything not fully inside it.
pub fn extends_beyond(container: Rect, rect: Rect) -> bool {
    container.union(rect) != container
}

/// `true` when `rect` lies fully inside `container` (edges inclusive).
pub fn contains(container: Rect, rect: Rect) -> bool {
    !extends_beyond(container, rect)
}

/// Rect anchored at the origin with the given size.
pub fn origin_rect(size: Size) -> Rect {
    Rect::from_origin_size((0.0, 0.0), size)
}

/// Round both dimensions to the nearest whole unit.
pub fn round_size(size: Size) -> Size {
    Size::new(size.width.round(), size.height.round())
}

/// Smallest rect covering both inputs.
pub fn union(a: Rect, b: Rect) -> Rect {
    a.union(b)
}

/// Human-readable `(x, y, w, h)` form used in finding explanations.
pub fn describe_rect(rect: Rect) -> String {
    format!(
        "({}, {}, {}, {})",
        fmt_unit(rect.x0),
        fmt_unit(rect.y0),
        fmt_unit(rect.width()),
        fmt_unit(rect.height())
    )
}

/// Human-readable `(w, h)` form used in finding explanations.
pub fn describe_size(size: Size) -> String {
    format!("({}, {})", fmt_unit(size.width), fmt_unit(size.height))
}

/// Format with at most two decimals, dropping trailing zeros.
pub(crate) fn fmt_unit(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
