use super::*;

#[test]
fn contrast_identities() {
    assert!((contrast_ratio(Color::WHITE, Color::BLACK) - 21.0).abs() < 1e-9);
    assert!((contrast_ratio(Color::BLACK, Color::BLACK) - 1.0).abs() < 1e-12);
    assert!((Color::WHITE.contrast_ratio(Color::BLUE) - 8.59).abs() < 0.01);
}

#[test]
fn contrast_is_symmetric() {
    let a = Color::from_rgba8(0x33, 0x66, 0x99, 0xFF);
    let b = Color::from_rgba8(0xEE, 0xDD, 0xCC, 0xFF);
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
}

#[test]
fn relative_luminance_endpoints() {
    assert_eq!(Color::BLACK.relative_luminance(), 0.0);
    assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
}

#[test]
fn average_of_same_color_is_identity() {
    let blues = [Color::BLUE; 4];
    assert_eq!(average(&blues).unwrap().to_hex(), Color::BLUE.to_hex());
    let whites = [Color::WHITE; 4];
    assert_eq!(average(&whites).unwrap().to_hex(), Color::WHITE.to_hex());
}

#[test]
fn average_of_blue_and_red_is_purple() {
    let avg = average(&[Color::BLUE, Color::RED]).unwrap();
    assert_eq!(avg.to_hex(), "#800080FF");
    assert!(average(&[]).is_none());
}

#[test]
fn sufficiency_table() {
    // (ratio, size, bold) -> expected
    let cases = [
        (4.6, 17.0, true, true),
        (4.6, 17.0, false, true),
        (4.6, 18.0, true, true),
        (4.6, 18.0, false, true),
        (4.4, 17.0, true, true),
        (4.4, 17.0, false, false),
        (4.4, 18.0, true, true),
        (4.4, 18.0, false, true),
        (3.0, 17.0, true, true),
        (3.0, 17.0, false, false),
        (3.0, 18.0, true, true),
        (3.0, 18.0, false, true),
        (2.99, 17.0, true, false),
        (2.99, 17.0, false, false),
        (2.99, 18.0, true, false),
        (2.99, 18.0, false, false),
    ];
    for (ratio, size, bold, expected) in cases {
        assert_eq!(
            is_sufficient(ratio, size, bold),
            expected,
            "ratio={ratio} size={size} bold={bold}"
        );
    }
}

#[test]
fn translucent_text_composites_toward_background() {
    let half_black = Color::rgba(0.0, 0.0, 0.0, 0.5);
    let c = half_black.over(Color::WHITE);
    assert!((c.r - 0.5).abs() < 1e-12);
    assert_eq!(c.a, 1.0);
    assert!(contrast_ratio(c, Color::WHITE) < contrast_ratio(Color::BLACK, Color::WHITE));
}
