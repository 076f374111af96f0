use super::*;
use serde_json::json;

#[test]
fn frame_def_accepts_object_and_array() {
    let a: FrameDef =
        serde_json::from_value(json!({"x": 1.0, "y": 2.0, "width": 30.0, "height": 40.0}))
            .unwrap();
    let b: FrameDef = serde_json::from_value(json!([1.0, 2.0, 30.0, 40.0])).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_rect(), Rect::new(1.0, 2.0, 31.0, 42.0));
}

#[test]
fn negative_sizes_are_normalized() {
    let r = FrameDef::new(10.0, 10.0, -4.0, -6.0).to_rect();
    assert_eq!(r, Rect::new(6.0, 4.0, 10.0, 10.0));
    assert!(r.width() >= 0.0 && r.height() >= 0.0);
}

#[test]
fn frame_def_round_trips_through_rect() {
    let f = FrameDef::new(3.0, 4.0, 5.0, 6.0);
    assert_eq!(FrameDef::from_rect(f.to_rect()), f);
}

#[test]
fn node_id_display_uses_hash_prefix() {
    assert_eq!(NodeId(7).to_string(), "#7");
    assert_eq!(NodeId(7).index(), 7);
}
