use crate::checks::{Check, CheckContext, CheckId, measurable_label};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry::describe_size;
use crate::scene::node::Node;

/// Text needs more lines than its `max_lines` allows.
///
/// A frame without width cannot show anything, so any non-empty text in it counts as truncated.
pub struct LabelTruncation;

impl Check for LabelTruncation {
    fn id(&self) -> CheckId {
        CheckId::LabelTruncation
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        let Some((text, frame)) = measurable_label(node) else {
            return Vec::new();
        };

        let detail = if frame.width() <= 0.0 {
            format!(
                "{} full text is '{}'\nframe has no width: {}",
                node.label(),
                text.text,
                describe_size(frame.size())
            )
        } else {
            if text.max_lines == 0 {
                return Vec::new();
            }
            let extent = cx.wrap(text, frame.width());
            let lines = extent.lines_for(text.font.line_height);
            if lines <= text.max_lines as usize {
                return Vec::new();
            }
            format!(
                "{} full text is '{}'\nscreen size: {} required size: {}\nmax lines: {} required lines: {}",
                node.label(),
                text.text,
                describe_size(frame.size()),
                describe_size(extent.size),
                text.max_lines,
                lines
            )
        };

        vec![Finding::new(self.id(), id, detail).with_crop(Some(frame))]
    }
}
