//! JSON scene description and the pre-order walk that turns it into a node list.
//!
//! A scene is what a host GUI integration exports: the window size, the safe area, appearance
//! traits and a nested view tree whose frames are already converted to window coordinates.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::def::Color;
use crate::config::LintConfig;
use crate::foundation::core::{FrameDef, Size};
use crate::foundation::error::{LintError, LintResult};
use crate::scene::context::{Appearance, SessionContext};
use crate::scene::node::{
    ControlPayload, ImagePayload, Node, NodeBase, NodePayload, TextPayload,
};
use crate::snapshot::Snapshot;
use crate::text::metrics::FontMetrics;

fn one() -> f64 {
    1.0
}

fn one_line() -> u32 {
    1
}

fn black() -> Color {
    Color::BLACK
}

/// Top-level scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    /// Window size in layout units.
    pub window: Size,
    /// Safe area; defaults to the whole window.
    #[serde(default)]
    pub safe_area: Option<FrameDef>,
    /// Appearance traits at capture time.
    #[serde(default)]
    pub appearance: Appearance,
    /// Root of the view tree.
    #[serde(default)]
    pub root: Option<ViewDef>,
}

/// One view in the exported tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDef {
    /// Element class identifier.
    pub kind: String,
    /// Frame in window coordinates, absent when the host could not resolve it.
    #[serde(default)]
    pub frame: Option<FrameDef>,
    /// Interactive control or active gesture responder.
    #[serde(default)]
    pub wants_input: bool,
    /// Hit-testing the center returns this view.
    #[serde(default)]
    pub consumes_input: bool,
    /// Device pixels per layout unit.
    #[serde(default = "one")]
    pub content_scale: f64,
    /// Accessibility identifier.
    #[serde(default)]
    pub accessibility_id: Option<String>,
    /// Numeric tag.
    #[serde(default)]
    pub tag: Option<i64>,
    /// Opacity where the view absorbs touches.
    #[serde(default = "one")]
    pub consumed_touch_opacity: f64,
    /// Declared background color.
    #[serde(default)]
    pub background_color: Option<Color>,
    /// Variant-specific attributes.
    #[serde(default)]
    pub element: ElementDef,
    /// Subviews in front-to-back drawing order.
    #[serde(default)]
    pub children: Vec<ViewDef>,
}

/// Variant-specific attributes of a [`ViewDef`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementDef {
    /// Text label.
    Label {
        /// Label font.
        #[serde(default)]
        font: FontMetrics,
        /// Maximum lines, `0` = unbounded; labels default to a single line.
        #[serde(default = "one_line")]
        max_lines: u32,
        /// Full text.
        #[serde(default)]
        text: String,
        /// Declared text color.
        #[serde(default = "black")]
        text_color: Color,
        /// Text color sampled by the host.
        #[serde(default)]
        measured_text_color: Option<Color>,
        /// Background color sampled by the host.
        #[serde(default)]
        measured_background_color: Option<Color>,
    },
    /// Button-like control.
    Button {
        /// Title font.
        #[serde(default)]
        font: Option<FontMetrics>,
        /// Title text.
        #[serde(default)]
        title: Option<String>,
        /// Shows an image.
        #[serde(default)]
        has_image: bool,
    },
    /// Image view.
    Image {
        /// Image reference.
        #[serde(default)]
        image_ref: Option<String>,
        /// Accessibility label of the image.
        #[serde(default)]
        accessibility_label: Option<String>,
    },
    /// Plain container or unknown element.
    #[default]
    View,
}

impl ElementDef {
    fn to_payload(&self) -> NodePayload {
        match self {
            ElementDef::Label {
                font,
                max_lines,
                text,
                text_color,
                measured_text_color,
                measured_background_color,
            } => NodePayload::Text(TextPayload {
                font: font.clone(),
                max_lines: *max_lines,
                text: text.clone(),
                foreground: *text_color,
                measured_text_color: *measured_text_color,
                measured_background_color: *measured_background_color,
            }),
            ElementDef::Button {
                font,
                title,
                has_image,
            } => NodePayload::Control(ControlPayload {
                font: font.clone(),
                title: title.clone(),
                has_image: *has_image,
            }),
            ElementDef::Image {
                image_ref,
                accessibility_label,
            } => NodePayload::Image(ImagePayload {
                image_ref: image_ref.clone(),
                accessibility_label: accessibility_label.clone(),
            }),
            ElementDef::View => NodePayload::Other,
        }
    }
}

impl SceneDef {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LintResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LintError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LintError::scene(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Resolve the session inputs: the pre-order node list and the shared context.
    ///
    /// Fails when there is no root view or the window has no usable size; nothing partial is
    /// returned in that case.
    pub fn resolve(
        &self,
        snapshot: Option<Snapshot>,
        config: &LintConfig,
    ) -> LintResult<(Vec<Node>, SessionContext)> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| LintError::scene("unresolvable root: scene has no root view"))?;
        let w = self.window;
        if !(w.width.is_finite() && w.height.is_finite() && w.width > 0.0 && w.height > 0.0) {
            return Err(LintError::scene(format!(
                "unresolvable root: window size {}x{} is not positive",
                w.width, w.height
            )));
        }

        let mut context = SessionContext::new(w).with_appearance(self.appearance.clone());
        if let Some(safe) = self.safe_area {
            context = context.with_safe_area(safe.to_rect());
        }
        if let Some(snapshot) = snapshot {
            context = context.with_snapshot(snapshot);
        }

        let nodes = walk(root, config);
        Ok((nodes, context))
    }
}

/// Pre-order walk assigning traversal indices and nesting levels.
///
/// Views whose kind the config ignores produce no node and consume no index; their subviews are
/// still visited.
pub fn walk(root: &ViewDef, config: &LintConfig) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut next_index = 0u64;
    let mut stack: Vec<(&ViewDef, u32)> = vec![(root, 0)];

    while let Some((view, level)) = stack.pop() {
        if config.ignores_kind(&view.kind) {
            tracing::trace!(kind = %view.kind, "ignoring view kind");
        } else {
            nodes.push(Node::new(
                NodeBase {
                    kind: view.kind.clone(),
                    screen_rect: view.frame.map(FrameDef::to_rect),
                    wants_input: view.wants_input,
                    consumes_input: view.consumes_input,
                    traversal_index: next_index,
                    nesting_level: level,
                    content_scale: view.content_scale,
                    accessibility_id: view.accessibility_id.clone(),
                    tag: view.tag,
                    consumed_touch_opacity: view.consumed_touch_opacity,
                    background_color: view.background_color,
                },
                view.element.to_payload(),
            ));
            next_index += 1;
        }
        // Reverse so the first child is visited first.
        for child in view.children.iter().rev() {
            stack.push((child, level + 1));
        }
    }

    nodes
}

#[cfg(test)]
#[path = "../../tests/unit/scene/walker.rs"]
mod tests;
