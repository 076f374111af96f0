//! Check registry.
//!
//! Every check is a stateless unit struct behind the [`Check`] trait. The registry is the fixed
//! order of [`CheckId::ALL`]; the engine evaluates checks per node in exactly that order, which
//! makes the finding list deterministic.

use serde::{Deserialize, Serialize};

use crate::config::LintConfig;
use crate::finding::{Finding, Severity};
use crate::foundation::core::{NodeId, Rect};
use crate::scene::context::SessionContext;
use crate::scene::node::{Node, TextPayload};
use crate::text::measure::{TextExtent, TextMeasurer};

pub(crate) mod clipping;
pub(crate) mod contrast;
pub(crate) mod font;
pub(crate) mod offscreen;
pub(crate) mod overlap;
pub(crate) mod safe_area;
pub(crate) mod tap_size;
pub(crate) mod touch_block;
pub(crate) mod truncation;

/// Stable identifier of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Text needs more lines than allowed.
    LabelTruncation,
    /// Wrapped text is taller than its frame.
    LabelVerticalClipping,
    /// Text frame leaves the window.
    LabelOffscreen,
    /// Two text frames overlap.
    LabelOverlap,
    /// Interactive element smaller than 44x44.
    MinimumTapSize,
    /// Interactive element covered by a later touch-consuming element.
    OverlappingTouchBlock,
    /// Visible element outside the safe area.
    SafeArea,
    /// Text font not on the allow-list.
    LabelUnexpectedFont,
    /// Text/background contrast below the WCAG minimum.
    LabelContrastRatio,
}

impl CheckId {
    /// Registry order.
    pub const ALL: [CheckId; 9] = [
        CheckId::LabelTruncation,
        CheckId::LabelVerticalClipping,
        CheckId::LabelOffscreen,
        CheckId::LabelOverlap,
        CheckId::MinimumTapSize,
        CheckId::OverlappingTouchBlock,
        CheckId::SafeArea,
        CheckId::LabelUnexpectedFont,
        CheckId::LabelContrastRatio,
    ];

    /// Implementation registered under this id.
    pub fn check(self) -> &'static dyn Check {
        match self {
            CheckId::LabelTruncation => &truncation::LabelTruncation,
            CheckId::LabelVerticalClipping => &clipping::LabelVerticalClipping,
            CheckId::LabelOffscreen => &offscreen::LabelOffscreen,
            CheckId::LabelOverlap => &overlap::LabelOverlap,
            CheckId::MinimumTapSize => &tap_size::MinimumTapSize,
            CheckId::OverlappingTouchBlock => &touch_block::OverlappingTouchBlock,
            CheckId::SafeArea => &safe_area::SafeArea,
            CheckId::LabelUnexpectedFont => &font::LabelUnexpectedFont,
            CheckId::LabelContrastRatio => &contrast::LabelContrastRatio,
        }
    }

    /// Check name as shown on findings.
    pub fn description(self) -> &'static str {
        match self {
            CheckId::LabelTruncation => "Label is truncated",
            CheckId::LabelVerticalClipping => "Label is clipped vertically",
            CheckId::LabelOffscreen => "Label is offscreen",
            CheckId::LabelOverlap => "Labels overlap",
            CheckId::MinimumTapSize => "Provide ample touch targets for interactive elements",
            CheckId::OverlappingTouchBlock => {
                "An element is blocking tappable area of another element"
            }
            CheckId::SafeArea => "Adhere to the safe area and layout margins",
            CheckId::LabelUnexpectedFont => "Label uses unexpected font",
            CheckId::LabelContrastRatio => "Use strongly contrasting colors to improve readability",
        }
    }

    /// Severity of every finding this check emits.
    pub fn severity(self) -> Severity {
        match self {
            CheckId::LabelOverlap => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// snake_case identifier, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckId::LabelTruncation => "label_truncation",
            CheckId::LabelVerticalClipping => "label_vertical_clipping",
            CheckId::LabelOffscreen => "label_offscreen",
            CheckId::LabelOverlap => "label_overlap",
            CheckId::MinimumTapSize => "minimum_tap_size",
            CheckId::OverlappingTouchBlock => "overlapping_touch_block",
            CheckId::SafeArea => "safe_area",
            CheckId::LabelUnexpectedFont => "label_unexpected_font",
            CheckId::LabelContrastRatio => "label_contrast_ratio",
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered checks in evaluation order.
pub fn registry() -> impl Iterator<Item = &'static dyn Check> {
    CheckId::ALL.into_iter().map(CheckId::check)
}

/// A rule that inspects one node (and, for pairwise rules, the rest of the list).
///
/// Implementations are pure: they read the node, the list and the context, and return zero or
/// more findings. "Not applicable" is an empty `Vec`, never an error.
pub trait Check: Send + Sync {
    /// Registry identifier.
    fn id(&self) -> CheckId;

    /// Check name as shown on findings.
    fn description(&self) -> &'static str {
        self.id().description()
    }

    /// Findings for `node`, which sits at `id` in `cx.nodes`.
    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding>;
}

/// Read-only inputs shared by all checks during one engine pass.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    /// Full node list in traversal order.
    pub nodes: &'a [Node],
    /// Window, safe area, snapshot and appearance.
    pub session: &'a SessionContext,
    /// Configuration frozen for the pass.
    pub config: &'a LintConfig,
    /// Text measurement backend.
    pub measurer: &'a dyn TextMeasurer,
}

impl<'a> CheckContext<'a> {
    /// Bundle the pass inputs.
    pub fn new(
        nodes: &'a [Node],
        session: &'a SessionContext,
        config: &'a LintConfig,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        Self {
            nodes,
            session,
            config,
            measurer,
        }
    }

    /// Nodes visited after `node` whose frames are resolved.
    ///
    /// Pairwise checks only look forward so a symmetric relation is reported once.
    pub fn later_nodes<'n>(
        &'n self,
        node: &'n Node,
    ) -> impl Iterator<Item = (NodeId, &'a Node, Rect)> + 'n {
        let depth = node.depth();
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, other)| other.depth() > depth)
            .filter_map(|(i, other)| other.rect().map(|r| (NodeId(i), other, r)))
    }

    /// Wrapped extent of a label's text at the given width.
    pub fn wrap(&self, text: &TextPayload, width: f64) -> TextExtent {
        self.measurer.measure(&text.text, &text.font, width)
    }
}

/// Text payload and resolved frame of a label worth measuring.
///
/// Labels without text or without a frame are never flagged by the text-flow checks.
pub(crate) fn measurable_label(node: &Node) -> Option<(&TextPayload, Rect)> {
    let text = node.as_text()?;
    let frame = node.rect()?;
    if text.text.is_empty() {
        return None;
    }
    Some((text, frame))
}

#[cfg(test)]
#[path = "../../tests/unit/checks/mod.rs"]
mod tests;
