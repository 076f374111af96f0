use super::*;
use crate::scene::node::{NodeBase, NodePayload};

fn node(tag: Option<i64>, aid: Option<&str>) -> Node {
    let mut base = NodeBase::new("UIView", None, 0);
    base.tag = tag;
    base.accessibility_id = aid.map(str::to_owned);
    Node::new(base, NodePayload::Other)
}

#[test]
fn defaults() {
    let c = LintConfig::default();
    assert!(c.excluded_checks.is_empty());
    assert!(c.ignore_underscored_kinds);
    assert!(c.accepts_font("Anything"));
    assert!(c.ignores_kind("_UIBarBackground"));
    assert!(!c.ignores_kind("UILabel"));
}

#[test]
fn parses_snake_case_check_ids() {
    let c = LintConfig::from_reader(
        r#"{
            "excluded_checks": ["label_overlap", "safe_area"],
            "expected_font_names": ["Avenir-Book"],
            "suppressions": [{"tag": 7, "check": "minimum_tap_size"}]
        }"#
        .as_bytes(),
    )
    .unwrap();
    assert!(c.is_excluded(CheckId::LabelOverlap));
    assert!(c.is_excluded(CheckId::SafeArea));
    assert!(!c.is_excluded(CheckId::LabelTruncation));
    assert!(c.ignore_underscored_kinds);
    assert!(c.accepts_font("Avenir-Book"));
    assert!(!c.accepts_font("Helvetica"));
    assert_eq!(c.suppressions[0].check, Some(CheckId::MinimumTapSize));
}

#[test]
fn rejects_unknown_fields_and_checks() {
    let err = LintConfig::from_reader(r#"{"excluded": []}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, LintError::Config(_)));
    assert!(LintConfig::from_reader(r#"{"excluded_checks": ["nope"]}"#.as_bytes()).is_err());
}

#[test]
fn suppression_matching() {
    let tagged = node(Some(7), Some("ok"));
    let other = node(Some(8), None);

    let by_tag = Suppression {
        tag: Some(7),
        ..Suppression::default()
    };
    assert!(by_tag.matches(&tagged, CheckId::SafeArea));
    assert!(!by_tag.matches(&other, CheckId::SafeArea));

    let by_aid_for_check = Suppression {
        accessibility_id: Some("ok".to_owned()),
        check: Some(CheckId::MinimumTapSize),
        ..Suppression::default()
    };
    assert!(by_aid_for_check.matches(&tagged, CheckId::MinimumTapSize));
    assert!(!by_aid_for_check.matches(&tagged, CheckId::SafeArea));
    assert!(!by_aid_for_check.matches(&other, CheckId::MinimumTapSize));

    let c = LintConfig::default().with_suppression(by_tag);
    assert!(c.is_suppressed(&tagged, CheckId::LabelOverlap));
    assert!(!c.is_suppressed(&other, CheckId::LabelOverlap));
}

#[test]
fn missing_file_is_config_error() {
    let err = LintConfig::from_path("tests/data/does-not-exist.json").unwrap_err();
    assert!(matches!(err, LintError::Config(_)));
}
