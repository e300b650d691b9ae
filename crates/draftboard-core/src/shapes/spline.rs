//! Quadratic spline shape.

use super::{point_to_line_dist, ShapeGeometry, ShapeId, ShapeStyle};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quadratic spline between two anchors.
///
/// The control point is implied at the chord midpoint, so the curve is the
/// chord itself; the anchors alone determine the visual extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Spline {
    /// Create a new spline.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    /// The implied quadratic control point.
    pub fn control(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

impl ShapeGeometry for Spline {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_line_dist(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.quad_to(self.control(), self.end);
        path
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_is_midpoint() {
        let spline = Spline::new(Point::new(0.0, 0.0), Point::new(100.0, 40.0));
        assert_eq!(spline.control(), Point::new(50.0, 20.0));
    }

    #[test]
    fn test_hit_test() {
        let spline = Spline::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(spline.hit_test(Point::new(50.0, 5.0), 10.0));
        assert!(!spline.hit_test(Point::new(50.0, 25.0), 10.0));
    }
}
