use crate::checks::{Check, CheckContext, CheckId};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry;
use crate::scene::node::Node;

/// Two text frames share area.
///
/// Only later text nodes are compared, so each overlapping pair yields exactly one finding,
/// attached to the earlier node.
pub struct LabelOverlap;

impl Check for LabelOverlap {
    fn id(&self) -> CheckId {
        CheckId::LabelOverlap
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        if !node.is_text() {
            return Vec::new();
        }
        let Some(frame) = node.rect() else {
            return Vec::new();
        };

        cx.later_nodes(node)
            .filter(|(_, other, rect)| other.is_text() && geometry::overlaps(frame, *rect))
            .map(|(other_id, other, rect)| {
                let detail = format!("{} overlaps {}", other.label(), node.label());
                Finding::new(self.id(), id, detail)
                    .with_crop(Some(geometry::union(frame, rect)))
                    .with_related(other_id)
            })
            .collect()
    }
}
