use serde::{Deserialize, Serialize};

/// Point size used when a producer does not specify one (platform body text).
pub const DEFAULT_POINT_SIZE: f64 = 17.0;
/// Family identifier used when a producer does not specify one.
pub const DEFAULT_FAMILY: &str = "System";
/// Line height as a multiple of point size when not given explicitly.
pub const DEFAULT_LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Font description attached to text-bearing nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FontMetricsDef")]
pub struct FontMetrics {
    /// Font identifier (PostScript-style name), matched against the expected-font allow-list.
    pub family: String,
    /// Point size.
    pub point_size: f64,
    /// Bold (semibold and heavier) weight.
    pub bold: bool,
    /// Distance between consecutive baselines.
    pub line_height: f64,
}

impl FontMetrics {
    /// Font with an explicit family and size; line height is derived from the size.
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
            bold: false,
            line_height: point_size * DEFAULT_LINE_HEIGHT_FACTOR,
        }
    }

    /// The platform system font at `point_size`.
    pub fn system(point_size: f64) -> Self {
        Self::new(DEFAULT_FAMILY, point_size)
    }

    /// Builder-style bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder-style explicit line height.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Large text per contrast guidelines (>= 18pt) or bold.
    pub fn is_large_or_bold(&self) -> bool {
        self.point_size >= crate::color::contrast::LARGE_TEXT_POINT_SIZE || self.bold
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::system(DEFAULT_POINT_SIZE)
    }
}

#[derive(Deserialize)]
struct FontMetricsDef {
    #[serde(default = "default_family")]
    family: String,
    #[serde(default = "default_point_size")]
    point_size: f64,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    line_height: Option<f64>,
}

fn default_family() -> String {
    DEFAULT_FAMILY.to_owned()
}

fn default_point_size() -> f64 {
    DEFAULT_POINT_SIZE
}

impl From<FontMetricsDef> for FontMetrics {
    fn from(def: FontMetricsDef) -> Self {
        let line_height = def
            .line_height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(def.point_size * DEFAULT_LINE_HEIGHT_FACTOR);
        Self {
            family: def.family,
            point_size: def.point_size,
            bold: def.bold,
            line_height,
        }
    }
}
