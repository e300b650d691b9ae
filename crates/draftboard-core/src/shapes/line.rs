//! The line family: plain lines, polylines, and dimension lines.
//!
//! All three are anchored by `start` and `end` and share the infinite-line
//! hit test (see [`super::point_to_line_dist`]).

use super::{
    point_to_line_dist, segment_angle_degrees, segment_length, ShapeGeometry, ShapeId, ShapeStyle,
};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        segment_length(self.start, self.end)
    }

    /// Get the angle in degrees from the positive x axis.
    pub fn angle_degrees(&self) -> f64 {
        segment_angle_degrees(self.start, self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Re-anchor `end` from a length and an angle in degrees, keeping
    /// `start` fixed. Used by the property editor.
    pub fn set_polar(&mut self, length: f64, angle_degrees: f64) {
        let radians = angle_degrees.to_radians();
        self.end = Point::new(
            self.start.x + length * radians.cos(),
            self.start.y + length * radians.sin(),
        );
    }
}

fn anchor_bounds(start: Point, end: Point) -> Rect {
    Rect::new(
        start.x.min(end.x),
        start.y.min(end.y),
        start.x.max(end.x),
        start.y.max(end.y),
    )
}

fn segment_path(start: Point, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);
    path
}

impl ShapeGeometry for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        anchor_bounds(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_line_dist(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        segment_path(self.start, self.end)
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

/// A polyline anchored by its first and last points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polyline {
    /// Create a new polyline.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeGeometry for Polyline {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        anchor_bounds(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_line_dist(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        segment_path(self.start, self.end)
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

/// A linear dimension: a measured line with perpendicular end ticks and a
/// length label at its midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Dimension {
    /// Tick length on each side of the dimension line.
    pub const TICK_SIZE: f64 = 5.0;

    /// Create a new dimension line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    /// The measured value (segment length).
    pub fn value(&self) -> f64 {
        segment_length(self.start, self.end)
    }

    /// The label text drawn at the midpoint.
    pub fn label(&self) -> String {
        format!("{:.2}", self.value())
    }

    /// Anchor point for the label.
    pub fn label_anchor(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

impl ShapeGeometry for Dimension {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        anchor_bounds(self.start, self.end).inflate(Self::TICK_SIZE, Self::TICK_SIZE)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_line_dist(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = segment_path(self.start, self.end);

        // Perpendicular ticks at both ends
        let dir = self.end - self.start;
        let len = dir.hypot();
        if len > f64::EPSILON {
            let perp = Vec2::new(-dir.y / len, dir.x / len) * Self::TICK_SIZE;
            for anchor in [self.start, self.end] {
                path.move_to(anchor + perp);
                path.line_to(anchor - perp);
            }
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
