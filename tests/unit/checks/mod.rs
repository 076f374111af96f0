use super::*;
use crate::color::def::Color;
use crate::foundation::core::Size;
use crate::scene::node::{ControlPayload, ImagePayload, NodeBase, NodePayload};
use crate::snapshot::Snapshot;
use crate::text::measure::ApproxMeasurer;
use crate::text::metrics::FontMetrics;

fn label(depth: u64, rect: Option<Rect>, text: &str) -> Node {
    Node::new(
        NodeBase::new("UILabel", rect, depth),
        NodePayload::Text(TextPayload {
            font: FontMetrics::default(),
            max_lines: 1,
            text: text.to_owned(),
            foreground: Color::BLACK,
            measured_text_color: None,
            measured_background_color: None,
        }),
    )
}

fn with_max_lines(mut node: Node, max_lines: u32) -> Node {
    if let NodePayload::Text(t) = &mut node.payload {
        t.max_lines = max_lines;
    }
    node
}

fn button(depth: u64, rect: Rect) -> Node {
    let mut base = NodeBase::new("UIButton", Some(rect), depth);
    base.wants_input = true;
    Node::new(base, NodePayload::Control(ControlPayload::default()))
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size((x, y), (w, h))
}

fn session() -> SessionContext {
    SessionContext::new(Size::new(320.0, 480.0))
}

fn run_with(
    check: CheckId,
    nodes: &[Node],
    session: &SessionContext,
    config: &LintConfig,
) -> Vec<Finding> {
    let m = ApproxMeasurer::new();
    let cx = CheckContext::new(nodes, session, config, &m);
    nodes
        .iter()
        .enumerate()
        .flat_map(|(i, n)| check.check().evaluate(NodeId(i), n, &cx))
        .collect()
}

fn run(check: CheckId, nodes: &[Node]) -> Vec<Finding> {
    run_with(check, nodes, &session(), &LintConfig::default())
}

#[test]
fn registry_follows_all_order() {
    let ids: Vec<CheckId> = registry().map(|c| c.id()).collect();
    assert_eq!(ids, CheckId::ALL);
    for id in CheckId::ALL {
        assert_eq!(id.check().description(), id.description());
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, id.as_str());
    }
    assert_eq!(CheckId::LabelOverlap.severity(), Severity::Warning);
    assert_eq!(CheckId::LabelContrastRatio.severity(), Severity::Error);
}

#[test]
fn later_nodes_looks_forward_only() {
    let nodes = vec![
        label(0, Some(rect(0.0, 0.0, 10.0, 10.0)), "a"),
        label(1, None, "b"),
        label(2, Some(rect(0.0, 0.0, 10.0, 10.0)), "c"),
    ];
    let s = session();
    let config = LintConfig::default();
    let m = ApproxMeasurer::new();
    let cx = CheckContext::new(&nodes, &s, &config, &m);
    let later: Vec<NodeId> = cx.later_nodes(&nodes[0]).map(|(id, _, _)| id).collect();
    assert_eq!(later, [NodeId(2)]);
    assert_eq!(cx.later_nodes(&nodes[2]).count(), 0);
}

#[test]
fn truncation_degenerate_frame() {
    let nodes = [label(0, Some(Rect::ZERO), "Some long text here")];
    let f = run(CheckId::LabelTruncation, &nodes);
    assert_eq!(f.len(), 1);
    assert_eq!(f[0].description, "Label is truncated");
    assert_eq!(f[0].node, NodeId(0));
}

#[test]
fn truncation_line_count() {
    let long = [label(
        0,
        Some(rect(0.0, 0.0, 180.0, 21.0)),
        "This text is too long for it's own good!",
    )];
    let f = run(CheckId::LabelTruncation, &long);
    assert_eq!(f.len(), 1);
    assert!(f[0].explanation.contains("required lines: 2"), "{}", f[0].explanation);

    let fits = [label(
        0,
        Some(rect(0.0, 0.0, 180.0, 21.0)),
        "This text is just right.",
    )];
    assert!(run(CheckId::LabelTruncation, &fits).is_empty());
}

#[test]
fn truncation_never_with_unbounded_lines() {
    let nodes = [
        with_max_lines(label(0, Some(rect(0.0, 0.0, 10.0, 5.0)), &"word ".repeat(200)), 0),
        with_max_lines(label(1, Some(rect(0.0, 0.0, 1.0, 1.0)), "x"), 0),
    ];
    assert!(run(CheckId::LabelTruncation, &nodes).is_empty());
}

#[test]
fn truncation_skips_empty_text_and_unresolved_frames() {
    let nodes = [
        label(0, Some(Rect::ZERO), ""),
        label(1, None, "Some long text here"),
    ];
    assert!(run(CheckId::LabelTruncation, &nodes).is_empty());
    assert!(run(CheckId::LabelVerticalClipping, &nodes).is_empty());
}

#[test]
fn clipping_degenerate_frame() {
    let nodes = [label(0, Some(Rect::ZERO), "Some long text here")];
    let f = run(CheckId::LabelVerticalClipping, &nodes);
    assert_eq!(f.len(), 1);
    assert_eq!(f[0].description, "Label is clipped vertically");
}

#[test]
fn clipping_compares_rounded_heights() {
    let text = "This text is too long for it's own good!";
    // Two lines of 20.4 need 40.8, which rounds to 41.
    let short = [with_max_lines(label(0, Some(rect(0.0, 0.0, 180.0, 20.0)), text), 0)];
    assert_eq!(run(CheckId::LabelVerticalClipping, &short).len(), 1);

    let noise = [with_max_lines(label(0, Some(rect(0.0, 0.0, 180.0, 40.6)), text), 0)];
    assert!(run(CheckId::LabelVerticalClipping, &noise).is_empty());

    let tall = [with_max_lines(label(0, Some(rect(0.0, 0.0, 180.0, 60.0)), text), 0)];
    assert!(run(CheckId::LabelVerticalClipping, &tall).is_empty());
}

#[test]
fn offscreen_boundaries() {
    let inside = [label(0, Some(rect(0.0, 0.0, 320.0, 480.0)), "x")];
    assert!(run(CheckId::LabelOffscreen, &inside).is_empty());

    for r in [
        rect(-1.0, 0.0, 10.0, 10.0),
        rect(0.0, -1.0, 10.0, 10.0),
        rect(311.0, 0.0, 10.0, 10.0),
        rect(0.0, 471.0, 10.0, 10.0),
    ] {
        let nodes = [label(0, Some(r), "x")];
        let f = run(CheckId::LabelOffscreen, &nodes);
        assert_eq!(f.len(), 1, "{r:?}");
        assert_eq!(f[0].crop, Some(r));
    }

    let not_text = [button(0, rect(-10.0, 0.0, 50.0, 50.0))];
    assert!(run(CheckId::LabelOffscreen, &not_text).is_empty());
}

#[test]
fn offscreen_uses_rounded_window() {
    let s = SessionContext::new(Size::new(319.6, 480.0));
    let nodes = [label(0, Some(rect(0.0, 0.0, 320.0, 10.0)), "x")];
    assert!(run_with(CheckId::LabelOffscreen, &nodes, &s, &LintConfig::default()).is_empty());
}

#[test]
fn overlap_is_reported_once_on_earlier_node() {
    let nodes = [
        label(0, Some(rect(0.0, 0.0, 100.0, 20.0)), "a"),
        label(1, Some(rect(50.0, 10.0, 100.0, 20.0)), "b"),
        label(2, Some(rect(0.0, 20.0, 60.0, 20.0)), "c"),
        button(3, rect(0.0, 0.0, 100.0, 100.0)),
    ];
    let f = run(CheckId::LabelOverlap, &nodes);
    // a-b and b-c overlap; a-c only touch along an edge.
    assert_eq!(f.len(), 2);
    assert_eq!((f[0].node, f[0].related), (NodeId(0), Some(NodeId(1))));
    assert_eq!((f[1].node, f[1].related), (NodeId(1), Some(NodeId(2))));
    assert_eq!(f[0].severity, Severity::Warning);
    assert_eq!(f[0].crop, Some(rect(0.0, 0.0, 150.0, 30.0)));
    assert_eq!(f[0].explanation, "UILabel [1] overlaps UILabel [0]");
}

#[test]
fn tap_size_boundaries() {
    let ok = [button(0, rect(0.0, 0.0, 44.0, 44.0))];
    assert!(run(CheckId::MinimumTapSize, &ok).is_empty());

    for (w, h) in [(43.0, 44.0), (44.0, 43.0), (0.0, 0.0)] {
        let nodes = [button(0, rect(0.0, 0.0, w, h))];
        let f = run(CheckId::MinimumTapSize, &nodes);
        assert_eq!(f.len(), 1, "{w}x{h}");
        assert_eq!(f[0].severity, Severity::Error);
    }

    let passive = [label(0, Some(rect(0.0, 0.0, 10.0, 10.0)), "x")];
    assert!(run(CheckId::MinimumTapSize, &passive).is_empty());
}

#[test]
fn touch_block_only_counts_later_consumers() {
    let mut early_cover = Node::new(
        NodeBase::new("UIView", Some(rect(0.0, 0.0, 200.0, 200.0)), 0),
        NodePayload::Other,
    );
    early_cover.base.consumes_input = true;
    let target = button(1, rect(10.0, 10.0, 60.0, 60.0));
    let mut cover = Node::new(
        NodeBase::new("UIView", Some(rect(40.0, 40.0, 100.0, 100.0)), 2),
        NodePayload::Other,
    );
    cover.base.consumes_input = true;
    let passive = Node::new(
        NodeBase::new("UIView", Some(rect(0.0, 0.0, 100.0, 100.0)), 3),
        NodePayload::Other,
    );

    let nodes = [early_cover, target, cover, passive];
    let f = run(CheckId::OverlappingTouchBlock, &nodes);
    assert_eq!(f.len(), 1);
    assert_eq!(f[0].node, NodeId(1));
    assert_eq!(f[0].related, Some(NodeId(2)));
    assert_eq!(f[0].explanation, "UIButton [1] is obscured by UIView [2]");
    assert_eq!(f[0].crop, Some(rect(10.0, 10.0, 130.0, 130.0)));
}

#[test]
fn safe_area_applies_to_visible_kinds() {
    let s = SessionContext::new(Size::new(390.0, 844.0))
        .with_safe_area(Rect::new(0.0, 47.0, 390.0, 810.0));
    let image = Node::new(
        NodeBase::new("UIImageView", Some(rect(0.0, 800.0, 50.0, 40.0)), 2),
        NodePayload::Image(ImagePayload::default()),
    );
    let container = Node::new(
        NodeBase::new("UIView", Some(rect(0.0, 0.0, 390.0, 844.0)), 3),
        NodePayload::Other,
    );
    let nodes = [
        label(0, Some(rect(16.0, 10.0, 100.0, 20.0)), "top"),
        button(1, rect(16.0, 100.0, 100.0, 44.0)),
        image,
        container,
    ];
    let f = run_with(CheckId::SafeArea, &nodes, &s, &LintConfig::default());
    let flagged: Vec<NodeId> = f.iter().map(|f| f.node).collect();
    assert_eq!(flagged, [NodeId(0), NodeId(2)]);
    assert!(f[0].explanation.contains("extends outside of safe area (0, 47, 390, 763)"));
}

#[test]
fn unexpected_font_uses_allow_list() {
    let nodes = [label(0, Some(rect(0.0, 0.0, 10.0, 10.0)), "x")];
    assert!(run(CheckId::LabelUnexpectedFont, &nodes).is_empty());

    let strict = LintConfig::default().with_expected_fonts(["Avenir-Book"]);
    let f = run_with(CheckId::LabelUnexpectedFont, &nodes, &session(), &strict);
    assert_eq!(f.len(), 1);
    assert!(f[0].explanation.contains("font name is 'System'"));

    let allowed = LintConfig::default().with_expected_fonts(["Avenir-Book", "System"]);
    assert!(run_with(CheckId::LabelUnexpectedFont, &nodes, &session(), &allowed).is_empty());
}

fn colored_label(rect: Rect, color: Color, font: FontMetrics) -> Node {
    let mut n = label(0, Some(rect), "Contrast");
    if let NodePayload::Text(t) = &mut n.payload {
        t.foreground = color;
        t.font = font;
    }
    n
}

#[test]
fn contrast_needs_a_snapshot() {
    let nodes = [colored_label(
        rect(10.0, 10.0, 50.0, 20.0),
        Color::WHITE,
        FontMetrics::default(),
    )];
    assert!(run(CheckId::LabelContrastRatio, &nodes).is_empty());
}

#[test]
fn contrast_thresholds_follow_size_and_weight() {
    let s = SessionContext::new(Size::new(100.0, 100.0))
        .with_snapshot(Snapshot::filled(200, 200, Color::WHITE));
    let frame = rect(10.0, 10.0, 50.0, 20.0);
    let cfg = LintConfig::default();
    let grey = Color::from_rgba8(0x94, 0x94, 0x94, 0xFF);

    let black = [colored_label(frame, Color::BLACK, FontMetrics::default())];
    assert!(run_with(CheckId::LabelContrastRatio, &black, &s, &cfg).is_empty());

    let regular = [colored_label(frame, grey, FontMetrics::default())];
    let f = run_with(CheckId::LabelContrastRatio, &regular, &s, &cfg);
    assert_eq!(f.len(), 1);
    assert!(f[0].explanation.contains("background color: #FFFFFFFF"));
    assert!(f[0].explanation.contains("contrast ratio: 3.03"), "{}", f[0].explanation);

    let bold = [colored_label(frame, grey, FontMetrics::default().with_bold(true))];
    assert!(run_with(CheckId::LabelContrastRatio, &bold, &s, &cfg).is_empty());

    let large = [colored_label(frame, grey, FontMetrics::system(18.0))];
    assert!(run_with(CheckId::LabelContrastRatio, &large, &s, &cfg).is_empty());
}

#[test]
fn contrast_skips_regions_off_the_raster() {
    let s = SessionContext::new(Size::new(100.0, 100.0))
        .with_snapshot(Snapshot::filled(100, 100, Color::WHITE));
    let nodes = [colored_label(
        rect(150.0, 150.0, 20.0, 20.0),
        Color::WHITE,
        FontMetrics::default(),
    )];
    assert!(run_with(CheckId::LabelContrastRatio, &nodes, &s, &LintConfig::default()).is_empty());
}

#[test]
fn contrast_prefers_measured_text_color() {
    let s = SessionContext::new(Size::new(100.0, 100.0))
        .with_snapshot(Snapshot::filled(100, 100, Color::WHITE));
    let mut n = colored_label(rect(10.0, 10.0, 50.0, 20.0), Color::BLACK, FontMetrics::default());
    if let NodePayload::Text(t) = &mut n.payload {
        t.measured_text_color = Some(Color::WHITE);
    }
    let f = run_with(CheckId::LabelContrastRatio, &[n], &s, &LintConfig::default());
    assert_eq!(f.len(), 1);
    assert!(f[0].explanation.contains("contrast ratio: 1.00"));
}
