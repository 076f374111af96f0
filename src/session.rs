//! One linting session: validated inputs plus the findings of a single engine pass.

use crate::config::LintConfig;
use crate::engine::LintEngine;
use crate::finding::Findings;
use crate::foundation::core::NodeId;
use crate::foundation::error::{LintError, LintResult};
use crate::scene::context::SessionContext;
use crate::scene::node::Node;
use crate::scene::walker::SceneDef;
use crate::snapshot::Snapshot;

/// Node list, context and findings; immutable once built.
#[derive(Debug)]
pub struct LintSession {
    nodes: Vec<Node>,
    context: SessionContext,
    config: LintConfig,
    findings: Findings,
}

impl LintSession {
    /// Validate the inputs and run the default engine with a snapshot of the process-wide
    /// config.
    pub fn new(nodes: Vec<Node>, context: SessionContext) -> LintResult<Self> {
        Self::with_config(nodes, context, LintConfig::current())
    }

    /// Validate the inputs and run the default engine with an explicit config.
    pub fn with_config(
        nodes: Vec<Node>,
        context: SessionContext,
        config: LintConfig,
    ) -> LintResult<Self> {
        Self::with_engine(nodes, context, config, &LintEngine::new())
    }

    /// Validate the inputs and run `engine`.
    #[tracing::instrument(skip_all, fields(nodes = nodes.len()))]
    pub fn with_engine(
        nodes: Vec<Node>,
        context: SessionContext,
        config: LintConfig,
        engine: &LintEngine,
    ) -> LintResult<Self> {
        validate(&nodes, &context)?;
        let findings = engine.run(&nodes, &context, &config);
        tracing::debug!(summary = %findings.summary(), "session built");
        Ok(Self {
            nodes,
            context,
            config,
            findings,
        })
    }

    /// Walk `scene` and run the default engine.
    pub fn from_scene(
        scene: &SceneDef,
        snapshot: Option<Snapshot>,
        config: LintConfig,
    ) -> LintResult<Self> {
        Self::from_scene_with_engine(scene, snapshot, config, &LintEngine::new())
    }

    /// Walk `scene` and run `engine`.
    pub fn from_scene_with_engine(
        scene: &SceneDef,
        snapshot: Option<Snapshot>,
        config: LintConfig,
        engine: &LintEngine,
    ) -> LintResult<Self> {
        let (nodes, context) = scene.resolve(snapshot, &config)?;
        Self::with_engine(nodes, context, config, engine)
    }

    /// Nodes in traversal order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node behind a finding's back-reference.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Shared context.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Config the pass ran with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Ordered findings.
    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    /// See [`Findings::summary`].
    pub fn summary(&self) -> String {
        self.findings.summary()
    }

    /// Node indices ordered for reporting: text, controls, images, then the rest, each group in
    /// traversal order.
    pub fn report_order(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = (0..self.nodes.len()).map(NodeId).collect();
        ids.sort_by_key(|id| {
            let n = &self.nodes[id.index()];
            (n.sort_order(), n.depth())
        });
        ids
    }
}

fn validate(nodes: &[Node], context: &SessionContext) -> LintResult<()> {
    let w = context.window_size;
    if !(w.width.is_finite() && w.height.is_finite() && w.width > 0.0 && w.height > 0.0) {
        return Err(LintError::validation(format!(
            "window size {}x{} is not positive",
            w.width, w.height
        )));
    }

    for pair in nodes.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if b.depth() <= a.depth() {
            return Err(LintError::validation(format!(
                "traversal index {} of '{}' does not follow {} of '{}'",
                b.depth(),
                b.base.kind,
                a.depth(),
                a.base.kind
            )));
        }
    }

    if let Some(node) = nodes.iter().find(|n| {
        n.rect().is_some_and(|r| {
            !(r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite())
        })
    }) {
        return Err(LintError::validation(format!(
            "{} has a non-finite frame",
            node.label()
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
