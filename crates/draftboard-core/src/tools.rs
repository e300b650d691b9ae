//! Tool palette and shape construction.

use crate::shapes::{
    Arc, Arrow, Circle, Dimension, Line, Polyline, Rectangle, Shape, ShapeStyle, Spline,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The active tool of the drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    MoveObject,
    Line,
    HorizontalLine,
    VerticalLine,
    Polyline,
    Rectangle,
    Circle,
    Arc,
    Spline,
    Arrow,
    Dimension,
    Text,
    // Placeholder tools: select a target but perform no geometry edit yet.
    Rotate,
    Mirror,
    Trim,
    Extend,
}

impl ToolKind {
    /// Whether a press with this tool starts a drag-to-draw gesture.
    pub fn is_drawing_tool(&self) -> bool {
        matches!(
            self,
            ToolKind::Line
                | ToolKind::HorizontalLine
                | ToolKind::VerticalLine
                | ToolKind::Polyline
                | ToolKind::Rectangle
                | ToolKind::Circle
                | ToolKind::Arc
                | ToolKind::Spline
                | ToolKind::Arrow
                | ToolKind::Dimension
        )
    }

    /// Whether this tool only selects a target without mutating it.
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            ToolKind::Rotate | ToolKind::Mirror | ToolKind::Trim | ToolKind::Extend
        )
    }

    /// Human-readable name for the status bar.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Pan => "Pan",
            ToolKind::MoveObject => "Move",
            ToolKind::Line => "Line",
            ToolKind::HorizontalLine => "Horizontal line",
            ToolKind::VerticalLine => "Vertical line",
            ToolKind::Polyline => "Polyline",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Arc => "Arc",
            ToolKind::Spline => "Spline",
            ToolKind::Arrow => "Arrow",
            ToolKind::Dimension => "Dimension",
            ToolKind::Text => "Text",
            ToolKind::Rotate => "Rotate",
            ToolKind::Mirror => "Mirror",
            ToolKind::Trim => "Trim",
            ToolKind::Extend => "Extend",
        }
    }

    /// Build the shape this tool draws between two anchors.
    ///
    /// Returns None for tools that do not draw (select, pan, move, text,
    /// placeholders). The axis-constrained line variants project the free
    /// endpoint onto the start's row or column.
    pub fn create_shape(&self, start: Point, end: Point, style: &ShapeStyle) -> Option<Shape> {
        let mut shape = match self {
            ToolKind::Line => Shape::Line(Line::new(start, end)),
            ToolKind::HorizontalLine => {
                Shape::Line(Line::new(start, Point::new(end.x, start.y)))
            }
            ToolKind::VerticalLine => Shape::Line(Line::new(start, Point::new(start.x, end.y))),
            ToolKind::Polyline => Shape::Polyline(Polyline::new(start, end)),
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(start, end)),
            ToolKind::Circle => Shape::Circle(Circle::new(start, end)),
            ToolKind::Arc => Shape::Arc(Arc::new(start, end)),
            ToolKind::Spline => Shape::Spline(Spline::new(start, end)),
            ToolKind::Arrow => Shape::Arrow(Arrow::new(start, end)),
            ToolKind::Dimension => Shape::Dimension(Dimension::new(start, end)),
            _ => return None,
        };
        *shape.style_mut() = style.clone();
        Some(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_tool_classification() {
        assert!(ToolKind::Line.is_drawing_tool());
        assert!(ToolKind::Dimension.is_drawing_tool());
        assert!(!ToolKind::Select.is_drawing_tool());
        assert!(!ToolKind::Text.is_drawing_tool());
        assert!(!ToolKind::Rotate.is_drawing_tool());
    }

    #[test]
    fn test_axis_constrained_lines() {
        let style = ShapeStyle::default();
        let start = Point::new(10.0, 20.0);
        let end = Point::new(50.0, 90.0);

        let h = ToolKind::HorizontalLine
            .create_shape(start, end, &style)
            .unwrap();
        match h {
            Shape::Line(line) => assert_eq!(line.end, Point::new(50.0, 20.0)),
            other => panic!("expected a line, got {}", other.kind_name()),
        }

        let v = ToolKind::VerticalLine
            .create_shape(start, end, &style)
            .unwrap();
        match v {
            Shape::Line(line) => assert_eq!(line.end, Point::new(10.0, 90.0)),
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_non_drawing_tools_create_nothing() {
        let style = ShapeStyle::default();
        for tool in [
            ToolKind::Select,
            ToolKind::Pan,
            ToolKind::MoveObject,
            ToolKind::Text,
            ToolKind::Trim,
        ] {
            assert!(tool.create_shape(Point::ZERO, Point::ZERO, &style).is_none());
        }
    }

    #[test]
    fn test_created_shape_carries_style() {
        let mut style = ShapeStyle::default();
        style.stroke_width = 3.0;
        let shape = ToolKind::Circle
            .create_shape(Point::ZERO, Point::new(40.0, 0.0), &style)
            .unwrap();
        assert_eq!(shape.style().stroke_width, 3.0);
    }
}
