use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::RED);

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([0.1, 0.2])).is_err());
}

#[test]
fn parses_hsla_object() {
    let c: Color = serde_json::from_value(json!({"h": 240.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!(c.r.abs() < 1e-9);
    assert!(c.g.abs() < 1e-9);
    assert!((c.b - 1.0).abs() < 1e-9);
}

#[test]
fn hex_output_is_uppercase_rgba() {
    assert_eq!(Color::WHITE.to_hex(), "#FFFFFFFF");
    assert_eq!(Color::BLUE.to_string(), "#0000FFFF");
    assert_eq!(
        serde_json::to_value(Color::RED).unwrap(),
        json!("#FF0000FF")
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
    assert_eq!("000000".parse::<Color>().unwrap(), Color::BLACK);
}
