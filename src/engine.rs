use crate::checks::{self, CheckContext};
use crate::config::LintConfig;
use crate::finding::{Finding, Findings};
use crate::foundation::core::NodeId;
use crate::scene::context::SessionContext;
use crate::scene::node::Node;
use crate::text::measure::{ApproxMeasurer, TextMeasurer};

/// Runs the registry over a node list.
///
/// The pass is synchronous and pure: nodes in list order outer, checks in registry order inner.
/// Running it twice over the same inputs yields the same ordered findings.
pub struct LintEngine {
    measurer: Box<dyn TextMeasurer>,
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LintEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintEngine").finish_non_exhaustive()
    }
}

impl LintEngine {
    /// Engine measuring text with [`ApproxMeasurer`].
    pub fn new() -> Self {
        Self::with_measurer(ApproxMeasurer::new())
    }

    /// Engine with a custom text measurement backend.
    pub fn with_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            measurer: Box::new(measurer),
        }
    }

    /// Text measurement backend.
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Evaluate every (node, check) pair not excluded or suppressed.
    #[tracing::instrument(skip_all, fields(nodes = nodes.len()))]
    pub fn run(&self, nodes: &[Node], session: &SessionContext, config: &LintConfig) -> Findings {
        let cx = CheckContext::new(nodes, session, config, self.measurer.as_ref());
        let mut out: Vec<Finding> = Vec::new();
        let mut skipped = 0usize;

        for (i, node) in nodes.iter().enumerate() {
            let id = NodeId(i);
            for check in checks::registry() {
                let check_id = check.id();
                if config.is_excluded(check_id)
                    || config.is_suppressed(node, check_id)
                    || !session.should_evaluate(node, check_id)
                {
                    tracing::trace!(node = %id, check = %check_id, "skipped");
                    skipped += 1;
                    continue;
                }
                out.extend(check.evaluate(id, node, &cx));
            }
        }

        tracing::debug!(findings = out.len(), skipped, "engine pass done");
        Findings::new(out)
    }
}

/// One-shot pass with the default engine.
pub fn run_checks(nodes: &[Node], session: &SessionContext, config: &LintConfig) -> Findings {
    LintEngine::new().run(nodes, session, config)
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
