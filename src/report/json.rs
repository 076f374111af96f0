use serde::Serialize;

use crate::finding::Finding;
use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{LintError, LintResult};
use crate::scene::context::Appearance;
use crate::scene::node::Node;
use crate::session::LintSession;

/// Machine-readable report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// `"<n> errors, <m> warnings"` or `"No findings"`.
    pub summary: String,
    /// Error count.
    pub errors: usize,
    /// Warning count.
    pub warnings: usize,
    /// Window size.
    pub window: Size,
    /// Safe area.
    pub safe_area: Rect,
    /// Appearance traits.
    pub appearance: &'a Appearance,
    /// Ordered findings.
    pub findings: &'a [Finding],
    /// Nodes in traversal order; findings index into this list.
    pub nodes: &'a [Node],
}

impl<'a> JsonReport<'a> {
    /// Borrow everything from `session`.
    pub fn new(session: &'a LintSession) -> Self {
        let findings = session.findings();
        let cx = session.context();
        Self {
            summary: findings.summary(),
            errors: findings.errors().count(),
            warnings: findings.warnings().count(),
            window: cx.window_size,
            safe_area: cx.safe_area,
            appearance: &cx.appearance,
            findings: findings.as_slice(),
            nodes: session.nodes(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_string_pretty(&self) -> LintResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LintError::serde(format!("serialize report: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/json.rs"]
mod tests;
