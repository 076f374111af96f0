use crate::checks::{Check, CheckContext, CheckId};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry::{self, describe_rect};
use crate::scene::node::Node;

/// Text, control or image reaching outside the safe area.
pub struct SafeArea;

impl Check for SafeArea {
    fn id(&self) -> CheckId {
        CheckId::SafeArea
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        if !(node.is_text() || node.is_control() || node.is_image()) {
            return Vec::new();
        }
        let Some(frame) = node.rect() else {
            return Vec::new();
        };
        let safe = cx.session.safe_area;
        if !geometry::extends_beyond(safe, frame) {
            return Vec::new();
        }

        let detail = format!(
            "{} {} extends outside of safe area {}",
            node.label(),
            describe_rect(frame),
            describe_rect(safe)
        );
        vec![Finding::new(self.id(), id, detail).with_crop(Some(frame))]
    }
}
