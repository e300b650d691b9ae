//! Backend-agnostic display list.
//!
//! The renderer emits one `DisplayList` per frame; a shell replays the
//! items against its drawing surface (canvas 2D, GPU, SVG) in order after
//! applying the list's transform.

use kurbo::{Affine, BezPath, Point};
use peniko::Color;

/// Where a text item is anchored relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Origin is the left end of the baseline.
    Start,
    /// Origin is the center of the text.
    Middle,
}

/// A single paint command, in scene coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    Fill {
        path: BezPath,
        color: Color,
    },
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
        dash: Option<Vec<f64>>,
    },
    Text {
        origin: Point,
        content: String,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    },
}

/// An ordered frame of paint commands.
///
/// Items are in scene coordinates; `transform` maps them to device space
/// (pan then zoom), so stroke widths scale with the zoom like the rest of
/// the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub transform: Affine,
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    pub fn new(transform: Affine) -> Self {
        Self {
            transform,
            items: Vec::new(),
        }
    }

    pub fn fill(&mut self, path: BezPath, color: Color) {
        self.items.push(DisplayItem::Fill { path, color });
    }

    pub fn stroke(&mut self, path: BezPath, color: Color, width: f64) {
        self.items.push(DisplayItem::Stroke {
            path,
            color,
            width,
            dash: None,
        });
    }

    pub fn stroke_dashed(&mut self, path: BezPath, color: Color, width: f64, dash: Vec<f64>) {
        self.items.push(DisplayItem::Stroke {
            path,
            color,
            width,
            dash: Some(dash),
        });
    }

    pub fn text(
        &mut self,
        origin: Point,
        content: impl Into<String>,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    ) {
        self.items.push(DisplayItem::Text {
            origin,
            content: content.into(),
            size,
            color,
            anchor,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
