//! Arrow shape.

use super::{point_to_line_dist, segment_length, ShapeGeometry, ShapeId, ShapeStyle};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An arrow: a shaft with a two-stroke head at `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point (where the head points).
    pub end: Point,
    /// Length of each head stroke.
    pub head_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Arrow {
    /// Default head stroke length.
    pub const DEFAULT_HEAD_SIZE: f64 = 10.0;

    /// Create a new arrow.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            head_size: Self::DEFAULT_HEAD_SIZE,
            style: ShapeStyle::default(),
        }
    }

    /// Get the length of the shaft.
    pub fn length(&self) -> f64 {
        segment_length(self.start, self.end)
    }

    /// The two back points of the head, 30 degrees off the shaft.
    pub fn head_points(&self) -> [Point; 2] {
        let angle = (self.end.y - self.start.y).atan2(self.end.x - self.start.x);
        let spread = std::f64::consts::FRAC_PI_6;
        [
            Point::new(
                self.end.x - self.head_size * (angle - spread).cos(),
                self.end.y - self.head_size * (angle - spread).sin(),
            ),
            Point::new(
                self.end.x - self.head_size * (angle + spread).cos(),
                self.end.y - self.head_size * (angle + spread).sin(),
            ),
        ]
    }
}

impl ShapeGeometry for Arrow {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let [left, right] = self.head_points();
        let xs = [self.start.x, self.end.x, left.x, right.x];
        let ys = [self.start.y, self.end.y, left.y, right.y];
        Rect::new(
            xs.iter().cloned().fold(f64::MAX, f64::min),
            ys.iter().cloned().fold(f64::MAX, f64::min),
            xs.iter().cloned().fold(f64::MIN, f64::max),
            ys.iter().cloned().fold(f64::MIN, f64::max),
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_line_dist(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        for back in self.head_points() {
            path.move_to(self.end);
            path.line_to(back);
        }
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
    fn test_head_points_symmetric() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let [a, b] = arrow.head_points();
        // Mirrored across the shaft
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y + b.y).abs() < 1e-9);
        assert!(a.x < 100.0);
    }

    #[test]
    fn test_hit_test_on_shaft() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(arrow.hit_test(Point::new(50.0, 5.0), 10.0));
        assert!(!arrow.hit_test(Point::new(50.0, 30.0), 10.0));
    }

    #[test]
    fn test_move_preserves_length() {
        let mut arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(60.0, 80.0));
        arrow.move_by(Vec2::new(15.0, -5.0));
        assert!((arrow.length() - 100.0).abs() < 1e-12);
    }
}
