use crate::checks::{Check, CheckContext, CheckId};
use crate::color::contrast;
use crate::finding::Finding;
use crate::foundation::core::NodeId;
use crate::scene::node::Node;
use crate::snapshot::effective_background;

/// Text color against the sampled background misses the WCAG minimum ratio.
///
/// Large (18pt and up) or bold text needs 3:1, everything else 4.5:1. Without a snapshot, or
/// when the label's frame does not intersect it, nothing can be judged and no finding is made.
pub struct LabelContrastRatio;

impl Check for LabelContrastRatio {
    fn id(&self) -> CheckId {
        CheckId::LabelContrastRatio
    }

    fn evaluate(&self, id: NodeId, node: &Node, cx: &CheckContext<'_>) -> Vec<Finding> {
        let Some(text) = node.as_text() else {
            return Vec::new();
        };
        let Some(frame) = node.rect() else {
            return Vec::new();
        };
        let Some(snapshot) = cx.session.snapshot.as_ref() else {
            return Vec::new();
        };
        let Some(region) = snapshot.crop(frame, cx.session.window_size) else {
            return Vec::new();
        };
        let Some(background) = effective_background(&region) else {
            return Vec::new();
        };

        let foreground = text.measured_text_color.unwrap_or(text.foreground);
        let seen = foreground.over(background);
        let ratio = contrast::contrast_ratio(seen, background);
        tracing::trace!(node = %id, ratio, "contrast");
        if contrast::is_sufficient(ratio, text.font.point_size, text.font.bold) {
            return Vec::new();
        }

        let detail = format!(
            "{} text color: {}\nbackground color: {}\ncontrast ratio: {:.2}",
            node.label(),
            foreground.to_hex(),
            background.to_hex(),
            ratio
        );
        vec![Finding::new(self.id(), id, detail).with_crop(Some(frame))]
    }
}
