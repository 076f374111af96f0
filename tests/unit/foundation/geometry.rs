use super::*;

#[test]
fn overlap_requires_positive_area() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(overlaps(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
    // Shared edge only.
    assert!(!overlaps(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
    // Disjoint.
    assert!(!overlaps(a, Rect::new(30.0, 30.0, 40.0, 40.0)));
    // Zero-sized rect inside `a`.
    assert!(!overlaps(a, Rect::new(5.0, 5.0, 5.0, 5.0)));
}

#[test]
fn extends_beyond_checks_every_edge() {
    let window = origin_rect(Size::new(320.0, 480.0));
    let inside = Rect::from_origin_size((120.0, 430.0), (200.0, 50.0));
    assert!(!extends_beyond(window, inside));
    assert!(contains(window, inside));

    for (x, y) in [(121.0, 430.0), (-1.0, 0.0), (0.0, -1.0), (120.0, 431.0)] {
        let r = Rect::from_origin_size((x, y), (200.0, 50.0));
        assert!(extends_beyond(window, r), "origin ({x}, {y})");
    }
}

#[test]
fn round_size_rounds_both_dimensions() {
    assert_eq!(round_size(Size::new(319.6, 480.4)), Size::new(320.0, 480.0));
}

#[test]
fn describe_rect_trims_decimals() {
    let r = Rect::from_origin_size((0.0, 1.5), (44.0, 43.25));
    assert_eq!(describe_rect(r), "(0, 1.5, 44, 43.25)");
    assert_eq!(describe_size(Size::new(0.0, 20.4)), "(0, 20.4)");
}
