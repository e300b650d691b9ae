//! Text shape.

use super::{ShapeGeometry, ShapeId, ShapeStyle};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A text label anchored at its baseline origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Baseline origin (left end of the baseline).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    /// Average glyph advance as a fraction of the font size.
    /// Rough sans-serif estimate; exact metrics live in the shell's
    /// text stack, which feeds back no measurements to the engine.
    const CHAR_WIDTH_FACTOR: f64 = 0.6;

    /// Create a new text shape.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ShapeStyle::default(),
        }
    }

    /// Approximate rendered width from character count and font size.
    pub fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }
}

impl ShapeGeometry for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        // Baseline anchor: the box extends one font size above the origin.
        Rect::new(
            self.position.x,
            self.position.y - self.font_size,
            self.position.x + self.approximate_width(),
            self.position.y,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn to_path(&self) -> BezPath {
        // Glyph outlines are the renderer's concern; the engine carries no
        // path for text.
        BezPath::new()
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
