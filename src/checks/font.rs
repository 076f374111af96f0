use crate::checks::{Check, CheckContext, CheckId};
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::scene::node::Node;

/// Label font missing from the configured allow-list. An empty list disables the check.
pub struct LabelUnexpectedFont;

impl Check for LabelUnexpectedFont {
    fn id(&self) -> CheckId {
        CheckId::LabelUnexpectedFont
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        let Some(text) = node.as_text() else {
            return Vec::new();
        };
        if cx.config.accepts_font(&text.font.family) {
            return Vec::new();
        }

        let detail = format!(
            "{} font name is '{}'\nexpected one of: {}",
            node.label(),
            text.font.family,
            cx.config.expected_font_names.join(", ")
        );
        vec![Finding::new(self.id(), id, detail).with_crop(node.rect())]
    }
}
