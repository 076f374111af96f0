use super::*;
use crate::config::LintConfig;
use crate::scene::walker::SceneDef;

fn session(json: serde_json::Value, config: LintConfig) -> LintSession {
    let scene: SceneDef = serde_json::from_value(json).unwrap();
    LintSession::from_scene(&scene, None, config).unwrap()
}

#[test]
fn renders_every_section_in_order() {
    let s = session(
        serde_json::json!({
            "window": {"width": 320, "height": 480},
            "appearance": {"style": "dark", "extra": {"size_class": "compact"}},
            "root": {
                "kind": "UIView",
                "frame": [0, 0, 320, 480],
                "children": [
                    {"kind": "UILabel", "frame": [0, 0, 0, 0], "tag": 3,
                     "element": {"type": "label", "text": "Some long text here"}},
                    {"kind": "UIButton", "frame": [10, 100, 30, 30], "wants_input": true,
                     "element": {"type": "button", "title": "Go"}}
                ]
            }
        }),
        LintConfig::default().with_expected_fonts(["System"]),
    );
    let text = TextReport::render(&s);

    let order = ["Summary", "Configuration", "Findings", "Elements", "View Hierarchy"]
        .map(|h| text.find(&format!("\n{h}\n")).unwrap());
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{text}");

    assert!(text.contains("3 errors, 0 warnings"));
    assert!(text.contains("appearance: dark, gamut: unspecified"));
    assert!(text.contains("  size_class: compact"));
    assert!(text.contains("expected fonts: System"));
    assert!(text.contains("1. [error] Label is truncated"));
    assert!(text.contains("   element: UILabel tag:3 #1"));
    assert!(text.contains("3. [error] Provide ample touch targets"));
    assert!(text.contains("   title: 'Go'"));
    // Hierarchy indents by nesting level.
    assert!(text.contains("\n  UIButton [2] (10, 100, 30, 30)\n"), "{text}");
}

#[test]
fn empty_findings_say_so() {
    let s = session(
        serde_json::json!({
            "window": {"width": 100, "height": 100},
            "root": {"kind": "UIView"}
        }),
        LintConfig::default(),
    );
    let text = TextReport::render(&s);
    assert!(text.contains("\nFindings\n--------\nNo findings\n"));
    assert!(text.contains("UIView [0] (unresolved)"));
    assert!(text.contains("snapshot: none"));
}
