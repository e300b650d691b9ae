//! Scene model: the ordered shape collection and current selection.

use crate::shapes::{Shape, ShapeId, HIT_TOLERANCE};
use kurbo::Point;

/// The drawing scene.
///
/// Shapes are kept in insertion order, which is also the z-order (later =
/// on top). At most one shape is selected, referenced by id; the selection
/// is cleared whenever the referenced shape leaves the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape; it becomes the implicit current object.
    pub fn add_shape(&mut self, shape: Shape) {
        self.selected = Some(shape.id());
        self.shapes.push(shape);
    }

    /// Remove a shape by id. Returns true if it was found and removed.
    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id() != id);
        let removed = self.shapes.len() != before;
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Remove all shapes and clear the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    /// Get a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by id.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Replace the shape list wholesale (document load). Clears selection.
    pub fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.selected = None;
    }

    /// Find the topmost shape hit by a scene point, using the shared hit
    /// tolerance. Scans in reverse z-order so the frontmost match wins.
    pub fn topmost_hit(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, HIT_TOLERANCE))
            .map(|s| s.id())
    }

    /// Select a shape. No-op if the id is not in the scene.
    pub fn select(&mut self, id: ShapeId) {
        if self.shapes.iter().any(|s| s.id() == id) {
            self.selected = Some(id);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected shape's id, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shape(id))
    }

    /// Mutable reference to the selected shape, if any.
    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.shape_mut(id)
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// The topmost shape's id, if any.
    pub fn topmost(&self) -> Option<ShapeId> {
        self.shapes.last().map(|s| s.id())
    }
}
