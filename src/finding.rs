use serde::{Deserialize, Serialize};

use crate::checks::CheckId;
use crate::foundation::core::{NodeId, Rect};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth a look; may be intentional.
    Warning,
    /// Defect.
    Error,
}

impl Severity {
    /// Lowercase name as used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported defect instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Check that produced the finding.
    pub check: CheckId,
    /// Check name/category.
    pub description: String,
    /// Instance detail.
    pub explanation: String,
    /// Severity.
    pub severity: Severity,
    /// Region of the snapshot (window coordinates) that illustrates the defect.
    pub crop: Option<Rect>,
    /// Originating node.
    pub node: NodeId,
    /// Other node of a pairwise relation (overlap, obstruction).
    pub related: Option<NodeId>,
}

impl Finding {
    /// Finding with the check's own description and severity.
    pub fn new(check: CheckId, node: NodeId, explanation: impl Into<String>) -> Self {
        Self {
            check,
            description: check.description().to_owned(),
            explanation: explanation.into(),
            severity: check.severity(),
            crop: None,
            node,
            related: None,
        }
    }

    /// Builder-style crop region.
    pub fn with_crop(mut self, crop: Option<Rect>) -> Self {
        self.crop = crop;
        self
    }

    /// Builder-style related node.
    pub fn with_related(mut self, related: NodeId) -> Self {
        self.related = Some(related);
        self
    }

    /// Error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Ordered findings of one session: node list order first, registry order second.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings(Vec<Finding>);

impl Findings {
    /// Wrap an already ordered list.
    pub fn new(findings: Vec<Finding>) -> Self {
        Self(findings)
    }

    /// All findings.
    pub fn as_slice(&self) -> &[Finding] {
        &self.0
    }

    /// Unwrap.
    pub fn into_vec(self) -> Vec<Finding> {
        self.0
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.0.iter()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No findings at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.0.iter().filter(|f| f.severity == Severity::Error)
    }

    /// Warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.0.iter().filter(|f| f.severity == Severity::Warning)
    }

    /// Findings originating from `node`.
    pub fn for_node(&self, node: NodeId) -> impl Iterator<Item = &Finding> {
        self.0.iter().filter(move |f| f.node == node)
    }

    /// Findings produced by `check`.
    pub fn for_check(&self, check: CheckId) -> impl Iterator<Item = &Finding> {
        self.0.iter().filter(move |f| f.check == check)
    }

    /// Any error-severity finding.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// `"<n> error(s), <m> warning(s)"`, or `"No findings"` when both are zero.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if errors + warnings == 0 {
            return "No findings".to_owned();
        }
        format!(
            "{errors} error{}, {warnings} warning{}",
            plural(errors),
            plural(warnings)
        )
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl From<Vec<Finding>> for Findings {
    fn from(value: Vec<Finding>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
#[path = "../tests/unit/finding.rs"]
mod tests;
