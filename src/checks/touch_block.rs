use crate::checks::{Check, CheckContext, CheckId};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry;
use crate::scene::node::Node;

/// Interactive element covered by a later element that swallows touches.
///
/// Later in traversal order means drawn on top. One finding per obstructing node.
pub struct OverlappingTouchBlock;

impl Check for OverlappingTouchBlock {
    fn id(&self) -> CheckId {
        CheckId::OverlappingTouchBlock
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        if !node.base.wants_input {
            return Vec::new();
        }
        let Some(frame) = node.rect() else {
            return Vec::new();
        };

        cx.later_nodes(node)
            .filter(|(_, other, rect)| other.base.consumes_input && geometry::overlaps(frame, *rect))
            .map(|(other_id, other, rect)| {
                let detail = format!("{} is obscured by {}", node.label(), other.label());
                Finding::new(self.id(), id, detail)
                    .with_crop(Some(geometry::union(frame, rect)))
                    .with_related(other_id)
            })
            .collect()
    }
}
