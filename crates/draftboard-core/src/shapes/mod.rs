//! Shape definitions for the drawing surface.

mod arrow;
mod circle;
mod line;
mod rectangle;
mod spline;
mod text;

pub use arrow::Arrow;
pub use circle::{Arc, Circle};
pub use line::{Dimension, Line, Polyline};
pub use rectangle::Rectangle;
pub use spline::Spline;
pub use text::Text;

use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hit-test tolerance in scene units, shared by all kinds.
pub const HIT_TOLERANCE: f64 = 10.0;

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

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
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

/// Dash pattern for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinePattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LinePattern {
    /// Dash lengths for this pattern, or None for a solid stroke.
    pub fn dashes(&self) -> Option<&'static [f64]> {
        match self {
            LinePattern::Solid => None,
            LinePattern::Dashed => Some(&[10.0, 5.0]),
            LinePattern::Dotted => Some(&[2.0, 3.0]),
        }
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width in scene units.
    pub stroke_width: f64,
    /// Fill color (None = outline only).
    pub fill_color: Option<SerializableColor>,
    /// Dash pattern.
    #[serde(default)]
    pub pattern: LinePattern,
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 1.0,
            fill_color: None,
            pattern: LinePattern::default(),
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Distance from a point to the infinite line through `a` and `b`.
///
/// The line family is hit-tested against the infinite carrier line, not the
/// segment: colinear points beyond the endpoints still register. This
/// matches the established selection behavior and is kept on purpose.
pub fn point_to_line_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let len = seg.hypot();
    if len < f64::EPSILON {
        return (point - a).hypot();
    }
    ((point.y - a.y) * seg.x - (point.x - a.x) * seg.y).abs() / len
}

/// Length of the segment from `a` to `b`.
pub fn segment_length(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Angle of the segment from `a` to `b` in degrees, measured from the
/// positive x axis.
pub fn segment_angle_degrees(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Common interface implemented by every shape kind.
pub trait ShapeGeometry {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in scene coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in scene coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Translate the shape by a scene-space delta.
    fn move_by(&mut self, delta: Vec2);
}

/// Closed variant over all shape kinds.
///
/// Hit-testing, rendering, and property editing dispatch exhaustively on
/// this enum, so adding a kind is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Polyline(Polyline),
    Dimension(Dimension),
    Rectangle(Rectangle),
    Circle(Circle),
    Arc(Arc),
    Spline(Spline),
    Arrow(Arrow),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Polyline(s) => s.id(),
            Shape::Dimension(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Arc(s) => s.id(),
            Shape::Spline(s) => s.id(),
            Shape::Arrow(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Polyline(s) => s.bounds(),
            Shape::Dimension(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Arc(s) => s.bounds(),
            Shape::Spline(s) => s.bounds(),
            Shape::Arrow(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Polyline(s) => s.hit_test(point, tolerance),
            Shape::Dimension(s) => s.hit_test(point, tolerance),
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
            Shape::Arc(s) => s.hit_test(point, tolerance),
            Shape::Spline(s) => s.hit_test(point, tolerance),
            Shape::Arrow(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Line(s) => s.to_path(),
            Shape::Polyline(s) => s.to_path(),
            Shape::Dimension(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Arc(s) => s.to_path(),
            Shape::Spline(s) => s.to_path(),
            Shape::Arrow(s) => s.to_path(),
            Shape::Text(s) => s.to_path(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::Polyline(s) => s.style(),
            Shape::Dimension(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Arc(s) => s.style(),
            Shape::Spline(s) => s.style(),
            Shape::Arrow(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Line(s) => s.style_mut(),
            Shape::Polyline(s) => s.style_mut(),
            Shape::Dimension(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Circle(s) => s.style_mut(),
            Shape::Arc(s) => s.style_mut(),
            Shape::Spline(s) => s.style_mut(),
            Shape::Arrow(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
        }
    }

    /// Translate the shape by a scene-space delta.
    ///
    /// Circles and arcs translate their center and re-anchor the rim point
    /// due east of it, preserving the radius but resetting the orientation.
    /// All other kinds translate both anchors, preserving extent exactly.
    pub fn move_by(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.move_by(delta),
            Shape::Polyline(s) => s.move_by(delta),
            Shape::Dimension(s) => s.move_by(delta),
            Shape::Rectangle(s) => s.move_by(delta),
            Shape::Circle(s) => s.move_by(delta),
            Shape::Arc(s) => s.move_by(delta),
            Shape::Spline(s) => s.move_by(delta),
            Shape::Arrow(s) => s.move_by(delta),
            Shape::Text(s) => s.move_by(delta),
        }
    }

    /// Display name of the shape's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "Line",
            Shape::Polyline(_) => "Polyline",
            Shape::Dimension(_) => "Dimension",
            Shape::Rectangle(_) => "Rectangle",
            Shape::Circle(_) => "Circle",
            Shape::Arc(_) => "Arc",
            Shape::Spline(_) => "Spline",
            Shape::Arrow(_) => "Arrow",
            Shape::Text(_) => "Text",
        }
    }

    /// Regenerate the shape's ID with a new unique identifier.
    /// Used when pasting so the copy never shares identity with the source.
    pub fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Line(s) => s.id = new_id,
            Shape::Polyline(s) => s.id = new_id,
            Shape::Dimension(s) => s.id = new_id,
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Circle(s) => s.id = new_id,
            Shape::Arc(s) => s.id = new_id,
            Shape::Spline(s) => s.id = new_id,
            Shape::Arrow(s) => s.id = new_id,
            Shape::Text(s) => s.id = new_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_line_dist_perpendicular() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        let d = point_to_line_dist(Point::new(50.0, 7.0), a, b);
        assert!((d - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_to_line_dist_beyond_endpoints() {
        // The carrier line is infinite: a colinear point past the end still
        // measures zero distance.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        let d = point_to_line_dist(Point::new(250.0, 0.0), a, b);
        assert!(d.abs() < 1e-12);
    }

    #[test]
    fn test_point_to_line_dist_degenerate() {
        let a = Point::new(10.0, 10.0);
        let d = point_to_line_dist(Point::new(13.0, 14.0), a, a);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_metrics() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert!((segment_length(a, b) - 100.0).abs() < 1e-12);
        assert!(segment_angle_degrees(a, b).abs() < 1e-12);

        let c = Point::new(0.0, 100.0);
        assert!((segment_angle_degrees(a, c) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_regenerate_id() {
        let mut shape = Shape::Line(Line::new(Point::ZERO, Point::new(10.0, 0.0)));
        let old = shape.id();
        shape.regenerate_id();
        assert_ne!(shape.id(), old);
    }

    #[test]
    fn test_line_pattern_dashes() {
        assert!(LinePattern::Solid.dashes().is_none());
        assert_eq!(LinePattern::Dashed.dashes(), Some(&[10.0, 5.0][..]));
    }
}
