use serde::{Deserialize, Serialize};

use crate::color::def::Color;
use crate::foundation::core::Rect;
use crate::foundation::geometry;
use crate::text::metrics::FontMetrics;

/// Attributes every rendered element carries, whatever its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBase {
    /// Element class identifier (for example `UILabel`, `android.widget.Button`).
    pub kind: String,
    /// Frame in global window coordinates; `None` when the element could not be resolved.
    pub screen_rect: Option<Rect>,
    /// Interactive control or element with an active gesture responder.
    pub wants_input: bool,
    /// A hit-test at the element's visual center lands on the element itself.
    pub consumes_input: bool,
    /// Pre-order visitation counter ("depth"); strictly increasing along the node list.
    pub traversal_index: u64,
    /// Tree depth ("level"), display only.
    pub nesting_level: u32,
    /// Device pixels per layout unit.
    pub content_scale: f64,
    /// Accessibility identifier, if set.
    pub accessibility_id: Option<String>,
    /// Numeric tag, if set.
    pub tag: Option<i64>,
    /// Opacity of the element where it absorbs touches.
    pub consumed_touch_opacity: f64,
    /// Background color the host declared for the element, display only.
    pub background_color: Option<Color>,
}

impl NodeBase {
    /// Base record with neutral defaults for everything except identity and geometry.
    pub fn new(kind: impl Into<String>, screen_rect: Option<Rect>, traversal_index: u64) -> Self {
        Self {
            kind: kind.into(),
            screen_rect,
            wants_input: false,
            consumes_input: false,
            traversal_index,
            nesting_level: 0,
            content_scale: 1.0,
            accessibility_id: None,
            tag: None,
            consumed_touch_opacity: 1.0,
            background_color: None,
        }
    }
}

/// Text element payload (labels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPayload {
    /// Font used to render the text.
    pub font: FontMetrics,
    /// Maximum number of lines; `0` means unbounded.
    pub max_lines: u32,
    /// Full (untruncated) text.
    pub text: String,
    /// Declared text color.
    pub foreground: Color,
    /// Text color extracted from pixels, when the producer measured one.
    pub measured_text_color: Option<Color>,
    /// Background color extracted from pixels, when the producer measured one.
    pub measured_background_color: Option<Color>,
}

/// Control element payload (buttons and similar).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPayload {
    /// Title font, when the control has a title label.
    pub font: Option<FontMetrics>,
    /// Title text.
    pub title: Option<String>,
    /// Control shows an image.
    pub has_image: bool,
}

/// Image element payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Opaque reference to the displayed image (asset name or path).
    pub image_ref: Option<String>,
    /// Accessibility label of the image.
    pub accessibility_label: Option<String>,
}

/// Variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodePayload {
    /// Text element.
    Text(TextPayload),
    /// Interactive control.
    Control(ControlPayload),
    /// Image element.
    Image(ImagePayload),
    /// Any other element.
    Other,
}

/// One rendered visual element at the moment of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Shared attributes.
    #[serde(flatten)]
    pub base: NodeBase,
    /// Variant payload.
    pub payload: NodePayload,
}

impl Node {
    /// Combine a base record with a payload.
    pub fn new(base: NodeBase, payload: NodePayload) -> Self {
        Self { base, payload }
    }

    /// Text element.
    pub fn is_text(&self) -> bool {
        matches!(self.payload, NodePayload::Text(_))
    }

    /// Control element.
    pub fn is_control(&self) -> bool {
        matches!(self.payload, NodePayload::Control(_))
    }

    /// Image element.
    pub fn is_image(&self) -> bool {
        matches!(self.payload, NodePayload::Image(_))
    }

    /// Text payload, if this is a text element.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            NodePayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Report ordering rank: text < control < image < other.
    ///
    /// Evaluation order never depends on this.
    pub fn sort_order(&self) -> u32 {
        match self.payload {
            NodePayload::Text(_) => 200,
            NodePayload::Control(_) => 300,
            NodePayload::Image(_) => 400,
            NodePayload::Other => 500,
        }
    }

    /// Both frames resolved and their intersection has area.
    pub fn overlaps(&self, other: &Node) -> bool {
        match (self.base.screen_rect, other.base.screen_rect) {
            (Some(a), Some(b)) => geometry::overlaps(a, b),
            _ => false,
        }
    }

    /// Frame in window coordinates.
    pub fn rect(&self) -> Option<Rect> {
        self.base.screen_rect
    }

    /// Traversal index shorthand.
    pub fn depth(&self) -> u64 {
        self.base.traversal_index
    }

    /// Font of text elements and titled controls.
    pub fn font(&self) -> Option<&FontMetrics> {
        match &self.payload {
            NodePayload::Text(t) => Some(&t.font),
            NodePayload::Control(c) => c.font.as_ref(),
            _ => None,
        }
    }

    /// `kind tag:<n> aid:'<id>'`, omitting the parts that are not set.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.base.kind.clone()];
        if let Some(tag) = self.base.tag.filter(|t| *t != 0) {
            parts.push(format!("tag:{tag}"));
        }
        if let Some(aid) = &self.base.accessibility_id {
            parts.push(format!("aid:'{aid}'"));
        }
        parts.join(" ")
    }

    /// `kind [depth]` label used in finding explanations.
    pub fn label(&self) -> String {
        format!("{} [{}]", self.base.kind, self.base.traversal_index)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
