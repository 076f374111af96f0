use serde::{Deserialize, Serialize};

pub use kurbo::{Point, Rect, Size};

/// Index of a node inside the session node list.
///
/// Findings refer back to their node through this index rather than by reference; both the node
/// list and the findings live exactly as long as the session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Underlying list position.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Origin/size rectangle as written by scene producers.
///
/// Accepts either `{ "x": .., "y": .., "width": .., "height": .. }` or `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrameDef {
    /// Left edge in window coordinates.
    pub x: f64,
    /// Top edge in window coordinates.
    pub y: f64,
    /// Width, negative values are normalized.
    pub width: f64,
    /// Height, negative values are normalized.
    pub height: f64,
}

impl FrameDef {
    /// Construct from origin and size components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert into a normalized `kurbo::Rect` (non-negative width and height).
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height)).abs()
    }

    /// Describe an existing rect in origin/size form.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

impl From<FrameDef> for Rect {
    fn from(value: FrameDef) -> Self {
        value.to_rect()
    }
}

impl<'de> Deserialize<'de> for FrameDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 4]),
            Obj {
                x: f64,
                y: f64,
                width: f64,
                height: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y, width, height]) => Ok(Self::new(x, y, width, height)),
            Repr::Obj {
                x,
                y,
                width,
                height,
            } => Ok(Self::new(x, y, width, height)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
