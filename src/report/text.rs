use std::fmt::Write as _;

use crate::foundation::core::NodeId;
use crate::foundation::geometry::{describe_rect, describe_size, fmt_unit};
use crate::scene::context::{ColorGamut, InterfaceStyle};
use crate::scene::node::{Node, NodePayload};
use crate::session::LintSession;

/// Plain-text report: summary, configuration, findings, elements and the view hierarchy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

impl TextReport {
    /// Render the whole report.
    pub fn render(session: &LintSession) -> String {
        let mut out = String::new();
        out.push_str("UILint Report\n");
        out.push_str("=============\n");

        section(&mut out, "Summary");
        let _ = writeln!(out, "{}", session.summary());

        section(&mut out, "Configuration");
        configuration(&mut out, session);

        section(&mut out, "Findings");
        findings(&mut out, session);

        section(&mut out, "Elements");
        for id in session.report_order() {
            if let Some(node) = session.node(id) {
                element(&mut out, session, id, node);
            }
        }

        section(&mut out, "View Hierarchy");
        for node in session.nodes() {
            let indent = "  ".repeat(node.base.nesting_level as usize);
            let frame = node
                .rect()
                .map(describe_rect)
                .unwrap_or_else(|| "(unresolved)".to_owned());
            let _ = writeln!(out, "{indent}{} [{}] {frame}", node, node.depth());
        }

        out
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

fn configuration(out: &mut String, session: &LintSession) {
    let cx = session.context();
    let config = session.config();
    let _ = writeln!(out, "window size: {}", describe_size(cx.window_size));
    let _ = writeln!(out, "safe area: {}", describe_rect(cx.safe_area));
    let style = match cx.appearance.style {
        InterfaceStyle::Unspecified => "unspecified",
        InterfaceStyle::Light => "light",
        InterfaceStyle::Dark => "dark",
    };
    let gamut = match cx.appearance.gamut {
        ColorGamut::Unspecified => "unspecified",
        ColorGamut::Srgb => "sRGB",
        ColorGamut::P3 => "P3",
    };
    let _ = writeln!(out, "appearance: {style}, gamut: {gamut}");
    for (k, v) in &cx.appearance.extra {
        let _ = writeln!(out, "  {k}: {v}");
    }
    match &cx.snapshot {
        Some(s) => {
            let _ = writeln!(out, "snapshot: {}x{} px", s.width(), s.height());
        }
        None => out.push_str("snapshot: none\n"),
    }
    let excluded: Vec<&str> = config.excluded_checks.iter().map(|c| c.as_str()).collect();
    let _ = writeln!(
        out,
        "excluded checks: {}",
        if excluded.is_empty() { "none".to_owned() } else { excluded.join(", ") }
    );
    let _ = writeln!(
        out,
        "expected fonts: {}",
        if config.expected_font_names.is_empty() {
            "any".to_owned()
        } else {
            config.expected_font_names.join(", ")
        }
    );
    let _ = writeln!(out, "suppressions: {}", config.suppressions.len());
}

fn findings(out: &mut String, session: &LintSession) {
    let findings = session.findings();
    if findings.is_empty() {
        out.push_str("No findings\n");
        return;
    }
    for (n, f) in findings.iter().enumerate() {
        let _ = writeln!(out, "{}. [{}] {}", n + 1, f.severity, f.description);
        if let Some(node) = session.node(f.node) {
            let _ = writeln!(out, "   element: {} {}", node, f.node);
        }
        if let Some(related) = f.related.and_then(|id| session.node(id).map(|n| (id, n))) {
            let _ = writeln!(out, "   related: {} {}", related.1, related.0);
        }
        if let Some(crop) = f.crop {
            let _ = writeln!(out, "   region: {}", describe_rect(crop));
        }
        for line in f.explanation.lines() {
            let _ = writeln!(out, "   {line}");
        }
    }
}

fn element(out: &mut String, session: &LintSession, id: NodeId, node: &Node) {
    let frame = node
        .rect()
        .map(describe_rect)
        .unwrap_or_else(|| "(unresolved)".to_owned());
    let _ = writeln!(out, "{} [{}] {frame}", node, node.depth());
    match &node.payload {
        NodePayload::Text(t) => {
            let _ = writeln!(
                out,
                "   text: '{}' font: {} {}pt{} max lines: {}",
                t.text,
                t.font.family,
                fmt_unit(t.font.point_size),
                if t.font.bold { " bold" } else { "" },
                t.max_lines
            );
            let _ = write!(out, "   text color: {}", t.foreground);
            if let Some(c) = t.measured_text_color {
                let _ = write!(out, " measured: {c}");
            }
            if let Some(c) = t.measured_background_color {
                let _ = write!(out, " background: {c}");
            }
            out.push('\n');
        }
        NodePayload::Control(c) => {
            if let Some(title) = &c.title {
                let _ = writeln!(out, "   title: '{title}'");
            }
            if c.has_image {
                out.push_str("   has image\n");
            }
        }
        NodePayload::Image(i) => {
            if let Some(r) = &i.image_ref {
                let _ = writeln!(out, "   image: {r}");
            }
            if let Some(l) = &i.accessibility_label {
                let _ = writeln!(out, "   accessibility label: '{l}'");
            }
        }
        NodePayload::Other => {}
    }
    if let Some(bg) = node.base.background_color {
        let _ = writeln!(out, "   background: {bg}");
    }
    let count = session.findings().for_node(id).count();
    if count > 0 {
        let _ = writeln!(out, "   findings: {count}");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/text.rs"]
mod tests;
