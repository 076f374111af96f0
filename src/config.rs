//! Lint configuration and the process-wide default.
//!
//! A session never reads the global directly during evaluation: [`LintConfig::current`] clones
//! it once when the session is built, so later [`LintConfig::set_current`] calls only affect
//! sessions created afterwards.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};

use crate::checks::CheckId;
use crate::foundation::error::{LintError, LintResult};
use crate::scene::node::Node;

fn default_true() -> bool {
    true
}

/// Skip rule matching nodes by tag and/or accessibility identifier.
///
/// Unset fields match anything; a suppression with neither `tag` nor `accessibility_id` matches
/// every node. Without `check` the whole node is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Suppression {
    /// Node tag to match.
    #[serde(default)]
    pub tag: Option<i64>,
    /// Accessibility identifier to match.
    #[serde(default)]
    pub accessibility_id: Option<String>,
    /// Only this check is skipped.
    #[serde(default)]
    pub check: Option<CheckId>,
}

impl Suppression {
    /// Does this rule skip `check` on `node`?
    pub fn matches(&self, node: &Node, check: CheckId) -> bool {
        if self.check.is_some_and(|c| c != check) {
            return false;
        }
        if self.tag.is_some() && self.tag != node.base.tag {
            return false;
        }
        match &self.accessibility_id {
            Some(aid) => node.base.accessibility_id.as_deref() == Some(aid.as_str()),
            None => true,
        }
    }
}

/// Settings consulted by the engine and the scene walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Checks never run.
    #[serde(default)]
    pub excluded_checks: BTreeSet<CheckId>,
    /// Font family allow-list; empty disables the unexpected-font check.
    #[serde(default)]
    pub expected_font_names: Vec<String>,
    /// Drop element kinds starting with `_` (framework-private views) while walking a scene.
    #[serde(default = "default_true")]
    pub ignore_underscored_kinds: bool,
    /// Per-node skip rules.
    #[serde(default)]
    pub suppressions: Vec<Suppression>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            excluded_checks: BTreeSet::new(),
            expected_font_names: Vec::new(),
            ignore_underscored_kinds: true,
            suppressions: Vec::new(),
        }
    }
}

static CURRENT: OnceLock<RwLock<LintConfig>> = OnceLock::new();

fn current_cell() -> &'static RwLock<LintConfig> {
    CURRENT.get_or_init(|| RwLock::new(LintConfig::default()))
}

impl LintConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LintResult<Self> {
        serde_json::from_reader(r).map_err(|e| LintError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LintError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Snapshot of the process-wide default.
    pub fn current() -> Self {
        // A poisoned lock still holds a complete value; take it.
        match current_cell().read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the process-wide default.
    pub fn set_current(config: LintConfig) {
        let mut guard = match current_cell().write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = config;
    }

    /// Restore the built-in default as the process-wide default.
    pub fn reset_current() {
        Self::set_current(Self::default());
    }

    /// Builder-style exclusion.
    pub fn excluding(mut self, check: CheckId) -> Self {
        self.excluded_checks.insert(check);
        self
    }

    /// Builder-style font allow-list.
    pub fn with_expected_fonts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_font_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style suppression.
    pub fn with_suppression(mut self, suppression: Suppression) -> Self {
        self.suppressions.push(suppression);
        self
    }

    /// Check disabled for every node.
    pub fn is_excluded(&self, check: CheckId) -> bool {
        self.excluded_checks.contains(&check)
    }

    /// Any suppression skips `check` on `node`.
    pub fn is_suppressed(&self, node: &Node, check: CheckId) -> bool {
        self.suppressions.iter().any(|s| s.matches(node, check))
    }

    /// Walker should drop views of this kind.
    pub fn ignores_kind(&self, kind: &str) -> bool {
        self.ignore_underscored_kinds && kind.starts_with('_')
    }

    /// Font family accepted by the allow-list; always `true` when the list is empty.
    pub fn accepts_font(&self, family: &str) -> bool {
        self.expected_font_names.is_empty()
            || self.expected_font_names.iter().any(|f| f == family)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
