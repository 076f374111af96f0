use crate::checks::{Check, CheckContext, CheckId};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry::{self, describe_rect, describe_size};
use crate::scene::node::Node;

/// Text frame reaches outside the window.
///
/// The window size is rounded to whole units first; a label flush with a fractional window edge
/// is not offscreen.
pub struct LabelOffscreen;

impl Check for LabelOffscreen {
    fn id(&self) -> CheckId {
        CheckId::LabelOffscreen
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        let Some(text) = node.as_text() else {
            return Vec::new();
        };
        let Some(frame) = node.rect() else {
            return Vec::new();
        };
        let window = geometry::round_size(cx.session.window_size);
        if !geometry::extends_beyond(geometry::origin_rect(window), frame) {
            return Vec::new();
        }

        let detail = format!(
            "{} full text is '{}'\nlabel frame: {} window size: {}",
            node.label(),
            text.text,
            describe_rect(frame),
            describe_size(window)
        );
        vec![Finding::new(self.id(), id, detail).with_crop(Some(frame))]
    }
}
