use crate::checks::{Check, CheckContext, CheckId};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry::fmt_unit;
use crate::scene::node::Node;

/// Smallest comfortable touch target edge, in layout units.
pub const MIN_TAP_SIZE: f64 = 44.0;

/// Interactive element narrower or shorter than [`MIN_TAP_SIZE`].
pub struct MinimumTapSize;

impl Check for MinimumTapSize {
    fn id(&self) -> CheckId {
        CheckId::MinimumTapSize
    }

    fn evaluate(&self, id: NodeId, node: &Node, _cx: &CheckContext<'_>) -> Vec<Finding> {
        if !node.base.wants_input {
            return Vec::new();
        }
        let Some(frame) = node.rect() else {
            return Vec::new();
        };
        if frame.width() >= MIN_TAP_SIZE && frame.height() >= MIN_TAP_SIZE {
            return Vec::new();
        }

        let detail = format!(
            "{} width/height is less than {}pt ({}, {})",
            node.label(),
            fmt_unit(MIN_TAP_SIZE),
            fmt_unit(frame.width()),
            fmt_unit(frame.height())
        );
        vec![Finding::new(self.id(), id, detail).with_crop(Some(frame))]
    }
}
