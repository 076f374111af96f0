use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::checks::CheckId;
use crate::foundation::core::{Rect, Size};
use crate::foundation::geometry;
use crate::scene::node::Node;
use crate::snapshot::Snapshot;

/// Per-(node, check) predicate; returning `false` skips that check on that node.
pub type ShouldEvaluate = Arc<dyn Fn(&Node, CheckId) -> bool + Send + Sync>;

/// Light/dark interface style at capture time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceStyle {
    /// Not reported by the host.
    #[default]
    Unspecified,
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

/// Display color gamut at capture time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGamut {
    /// Not reported by the host.
    #[default]
    Unspecified,
    /// sRGB display.
    Srgb,
    /// Display P3.
    P3,
}

/// Appearance/trait bag; reporting context only, no check reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Light or dark mode.
    #[serde(default)]
    pub style: InterfaceStyle,
    /// Color gamut.
    #[serde(default)]
    pub gamut: ColorGamut,
    /// Any further host traits (size classes, content size category, ...).
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

/// Everything the checks share besides the node list.
///
/// Built once per session and read-only afterwards.
#[derive(Clone)]
pub struct SessionContext {
    /// Window size in layout units.
    pub window_size: Size,
    /// Screen capture, when available.
    pub snapshot: Option<Snapshot>,
    /// Region free of system chrome and insets.
    pub safe_area: Rect,
    /// Appearance traits.
    pub appearance: Appearance,
    /// Optional fine-grained suppression hook.
    pub should_evaluate: Option<ShouldEvaluate>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("window_size", &self.window_size)
            .field("snapshot", &self.snapshot)
            .field("safe_area", &self.safe_area)
            .field("appearance", &self.appearance)
            .field("should_evaluate", &self.should_evaluate.is_some())
            .finish()
    }
}

impl SessionContext {
    /// Context with no snapshot whose safe area is the whole window.
    pub fn new(window_size: Size) -> Self {
        Self {
            window_size,
            snapshot: None,
            safe_area: geometry::origin_rect(window_size),
            appearance: Appearance::default(),
            should_evaluate: None,
        }
    }

    /// Builder-style snapshot.
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Builder-style safe area.
    pub fn with_safe_area(mut self, safe_area: Rect) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Builder-style appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Builder-style suppression predicate.
    pub fn with_should_evaluate(
        mut self,
        f: impl Fn(&Node, CheckId) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_evaluate = Some(Arc::new(f));
        self
    }

    /// Window rect at the origin.
    pub fn window_rect(&self) -> Rect {
        geometry::origin_rect(self.window_size)
    }

    /// Consult the suppression predicate; `true` when none is installed.
    pub fn should_evaluate(&self, node: &Node, check: CheckId) -> bool {
        self.should_evaluate
            .as_ref()
            .is_none_or(|f| f(node, check))
    }
}
