//! uilint audits a rendered user-interface tree for design and accessibility defects.
//!
//! Truncated or clipped text, undersized tap targets, obscured touch targets, elements outside
//! the safe area, insufficient contrast, unexpected fonts and overlapping labels are reported as
//! an ordered list of findings. The API is session-oriented:
//!
//! - Load a [`SceneDef`] (or build the [`Node`] list and [`SessionContext`] yourself)
//! - Create a [`LintSession`], which validates the inputs and runs the [`LintEngine`] once
//! - Read [`Findings`] and render a [`TextReport`] or [`JsonReport`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod checks;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod finding;
pub(crate) mod report;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod snapshot;
pub(crate) mod text;

pub use crate::foundation::core::{FrameDef, NodeId, Point, Rect, Size};
pub use crate::foundation::error::{LintError, LintResult};
pub use crate::foundation::geometry;

pub use crate::checks::tap_size::MIN_TAP_SIZE;
pub use crate::checks::{Check, CheckContext, CheckId, registry};
pub use crate::color::contrast;
pub use crate::color::def::Color;
pub use crate::config::{LintConfig, Suppression};
pub use crate::engine::{LintEngine, run_checks};
pub use crate::finding::{Finding, Findings, Severity};
pub use crate::report::crops::write_crops;
pub use crate::report::json::JsonReport;
pub use crate::report::text::TextReport;
pub use crate::scene::context::{
    Appearance, ColorGamut, InterfaceStyle, SessionContext, ShouldEvaluate,
};
pub use crate::scene::node::{
    ControlPayload, ImagePayload, Node, NodeBase, NodePayload, TextPayload,
};
pub use crate::scene::walker::{ElementDef, SceneDef, ViewDef, walk};
pub use crate::session::LintSession;
pub use crate::snapshot::{Snapshot, effective_background};
pub use crate::text::measure::{ApproxMeasurer, TextExtent, TextMeasurer};
pub use crate::text::metrics::{
    DEFAULT_FAMILY, DEFAULT_LINE_HEIGHT_FACTOR, DEFAULT_POINT_SIZE, FontMetrics,
};
pub use crate::text::parley_engine::ParleyMeasurer;
