//! Rectangle shape.

use super::{ShapeGeometry, ShapeId, ShapeStyle};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle anchored by two opposite corners.
///
/// The anchors are kept as drawn (not normalized), so a drag from
/// bottom-right to top-left round-trips through move operations unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// First corner (where the drag started).
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle from two opposite corners.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    /// Get the normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }
}

impl ShapeGeometry for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_rect().inflate(tolerance, tolerance).contains(point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn move_by(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}
