use crate::checks::{Check, CheckContext, CheckId, measurable_label};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::foundation::geometry::{describe_size, fmt_unit};
use crate::scene::node::Node;

/// Wrapped text is taller than the label's frame.
///
/// Both heights are rounded to whole units before comparing so sub-pixel layout noise does not
/// produce findings.
pub struct LabelVerticalClipping;

impl Check for LabelVerticalClipping {
    fn id(&self) -> CheckId {
        CheckId::LabelVerticalClipping
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
            let needed = cx.wrap(text, frame.width()).size.height;
            if needed.round() <= frame.height().round() {
                return Vec::new();
            }
            format!(
                "{} full text is '{}'\nframe height: {} required height: {}",
                node.label(),
                text.text,
                fmt_unit(frame.height()),
                fmt_unit(needed)
            )
        };

        vec![Finding::new(self.id(), id, detail).with_crop(Some(frame))]
    }
}
