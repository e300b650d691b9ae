//! Circle and arc shapes in center + rim-point form.

use super::{segment_length, ShapeGeometry, ShapeId, ShapeStyle};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle defined by its center and a point on the rim.
///
/// The radius is always the distance between the two anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center of the circle.
    pub center: Point,
    /// Point on the rim (where the drag ended).
    pub rim: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, rim: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            rim,
            style: ShapeStyle::default(),
        }
    }

    /// Get the radius.
    pub fn radius(&self) -> f64 {
        segment_length(self.center, self.rim)
    }

    /// Hit-test a point against a radius band around the rim.
    fn ring_hit(center: Point, radius: f64, point: Point, tolerance: f64) -> bool {
        (segment_length(center, point) - radius).abs() < tolerance
    }

    /// Move the center, re-anchoring the rim due east so the radius is
    /// preserved while the orientation resets to horizontal.
    fn translate_center(center: &mut Point, rim: &mut Point, delta: Vec2) {
        let radius = segment_length(*center, *rim);
        *center += delta;
        *rim = Point::new(center.x + radius, center.y);
    }
}

impl ShapeGeometry for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let r = self.radius();
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        Self::ring_hit(self.center, self.radius(), point, tolerance)
    }

    fn to_path(&self) -> BezPath {
        KurboCircle::new(self.center, self.radius()).to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn move_by(&mut self, delta: Vec2) {
        Self::translate_center(&mut self.center, &mut self.rim, delta);
    }
}

/// An arc in the same center + rim form as [`Circle`].
///
/// Rendered as a full circle for now; the variant is kept separate so a
/// real sweep range can be added without touching circle call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub(crate) id: ShapeId,
    /// Center of the arc's circle.
    pub center: Point,
    /// Point on the rim.
    pub rim: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Arc {
    /// Create a new arc.
    pub fn new(center: Point, rim: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            rim,
            style: ShapeStyle::default(),
        }
    }

    /// Get the radius.
    pub fn radius(&self) -> f64 {
        segment_length(self.center, self.rim)
    }
}

impl ShapeGeometry for Arc {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let r = self.radius();
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        Circle::ring_hit(self.center, self.radius(), point, tolerance)
    }

    fn to_path(&self) -> BezPath {
        KurboCircle::new(self.center, self.radius()).to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn move_by(&mut self, delta: Vec2) {
        Circle::translate_center(&mut self.center, &mut self.rim, delta);
    }
}
