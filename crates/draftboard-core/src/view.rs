//! View transform: pan, zoom, paper format, and grid snapping.

use crate::template::PaperFormat;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Maximum allowed zoom scale.
pub const MAX_SCALE: f64 = 5.0;
/// Grid spacing in scene units.
pub const GRID_SIZE: f64 = 20.0;

/// Wheel zoom step when zooming in.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Wheel zoom step when zooming out.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
/// Toolbar zoom step when zooming in.
pub const BUTTON_ZOOM_IN: f64 = 1.2;
/// Toolbar zoom step when zooming out.
pub const BUTTON_ZOOM_OUT: f64 = 0.8;

/// View state for the drawing surface.
///
/// The render transform applies the pan offset before the scale, so the
/// offset is in device units and scene coordinates are format-independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Zoom scale, clamped to [MIN_SCALE, MAX_SCALE].
    pub scale: f64,
    /// Pan translation in device units.
    pub offset: Vec2,
    /// Current paper format.
    pub format: PaperFormat,
    /// Grid spacing in scene units.
    pub grid_size: f64,
    /// Whether pointer input rounds to the grid.
    pub snap_enabled: bool,
    /// Whether the grid is painted.
    pub grid_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            format: PaperFormat::default(),
            grid_size: GRID_SIZE,
            snap_enabled: false,
            grid_visible: true,
        }
    }
}

impl ViewState {
    /// Create a new view state with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene-to-device transform (translate, then scale).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Convert a device point to scene coordinates.
    pub fn screen_to_scene(&self, device: Point) -> Point {
        Point::new(
            (device.x - self.offset.x) / self.scale,
            (device.y - self.offset.y) / self.scale,
        )
    }

    /// Convert a scene point to device coordinates.
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point::new(
            scene.x * self.scale + self.offset.x,
            scene.y * self.scale + self.offset.y,
        )
    }

    /// Pan by a device-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom by a factor, keeping the device point under the cursor fixed.
    ///
    /// The scale is clamped to the allowed range; a clamped-to-no-change
    /// request leaves the offset untouched.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64) {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }
        let applied = new_scale / self.scale;
        self.offset = Vec2::new(
            cursor.x - (cursor.x - self.offset.x) * applied,
            cursor.y - (cursor.y - self.offset.y) * applied,
        );
        self.scale = new_scale;
    }

    /// Zoom by a factor around the view origin (toolbar buttons).
    pub fn zoom(&mut self, factor: f64) {
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Reset pan and zoom to the defaults.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = Vec2::ZERO;
    }

    /// Round a scene coordinate to the nearest grid multiple when snapping
    /// is enabled; identity otherwise.
    pub fn snap(&self, point: Point) -> Point {
        if !self.snap_enabled {
            return point;
        }
        Point::new(
            (point.x / self.grid_size).round() * self.grid_size,
            (point.y / self.grid_size).round() * self.grid_size,
        )
    }

    /// Zoom as a whole percentage for status display.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}
