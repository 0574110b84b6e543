//! Committed strokes and their render policy.

use crate::path::{self, DecodeError};
use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// Drawing tools. The eraser never produces a persisted stroke; it only
/// mutates existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Pencil,
    Marker,
    Eraser,
}

impl Tool {
    /// Whether a gesture with this tool commits a new stroke.
    pub fn draws(&self) -> bool {
        !matches!(self, Tool::Eraser)
    }

    /// Width multiplier renderers apply on top of a stroke's base width.
    pub fn width_scale(&self) -> f64 {
        match self {
            Tool::Pen => 1.0,
            Tool::Pencil => 0.75,
            Tool::Marker => 2.5,
            Tool::Eraser => 1.0,
        }
    }

    /// Opacity renderers apply to the stroke color.
    pub fn opacity(&self) -> f64 {
        match self {
            Tool::Marker => 0.5,
            _ => 1.0,
        }
    }
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// One committed unit of drawn geometry with fixed tool, color, width, and
/// an encoded path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Tool that produced the stroke.
    pub tool: Tool,
    /// Stroke color.
    pub color: SerializableColor,
    /// Width before tool and renderer scaling.
    pub base_width: f64,
    /// Encoded path (see [`crate::path`]); non-empty once committed.
    pub encoded_path: String,
    /// Monotonic ordering key assigned at commit time.
    pub created_at: f64,
}

impl Stroke {
    /// Create a committed stroke.
    pub fn new(
        tool: Tool,
        color: SerializableColor,
        base_width: f64,
        encoded_path: String,
        created_at: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool,
            color,
            base_width,
            encoded_path,
            created_at,
        }
    }

    /// A fresh stroke carrying this stroke's tool, color, and width over a
    /// new path. Used when erasing splits a stroke into surviving pieces.
    pub(crate) fn replacement(&self, encoded_path: String, created_at: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool: self.tool,
            color: self.color,
            base_width: self.base_width,
            encoded_path,
            created_at,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// The stroke color with the tool's opacity policy applied.
    pub fn render_color(&self) -> Color {
        let alpha = (self.color.a as f64 * self.tool.opacity()) as u8;
        Color::from_rgba8(self.color.r, self.color.g, self.color.b, alpha)
    }

    /// The stroke width with the tool's weight policy applied.
    pub fn render_width(&self) -> f64 {
        self.base_width * self.tool.width_scale()
    }

    /// Approximate decoded geometry: every coordinate pair of the encoded
    /// path, control points included.
    pub fn decoded_points(&self) -> Result<Vec<Point>, DecodeError> {
        path::decode_points(&self.encoded_path)
    }

    /// Bounding box of the decoded geometry. `None` for malformed or
    /// pointless paths.
    pub fn bounds(&self) -> Option<Rect> {
        let points = self.decoded_points().ok()?;
        let first = points.first()?;

        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for point in &points[1..] {
            rect.x0 = rect.x0.min(point.x);
            rect.y0 = rect.y0.min(point.y);
            rect.x1 = rect.x1.max(point.x);
            rect.y1 = rect.y1.max(point.y);
        }
        Some(rect)
    }
}
