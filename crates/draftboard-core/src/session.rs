//! The drawing session: tool dispatch, gestures, and command surface.
//!
//! `Session` is the single owner of all mutable drawing state. The shell
//! feeds it pointer/key events and command calls, then re-renders from the
//! borrowed state. Blocking UI (text entry, confirmation) is modeled as a
//! pending [`SessionRequest`] the shell resolves asynchronously.

use crate::document::{DocumentError, DrawingFile};
use crate::history::History;
use crate::input::{Key, Modifiers, MouseButton};
use crate::scene::Scene;
use crate::shapes::{Shape, ShapeId, ShapeStyle, Text};
use crate::template::PaperFormat;
use crate::tools::ToolKind;
use crate::view::{self, ViewState};
use kurbo::{Point, Vec2};
use log::{debug, info, warn};

/// Offset applied to pasted shapes so the copy is visibly apart.
const PASTE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Severity of a transient user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A transient message for the shell's status surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Warning,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// A request the session raises for the shell to resolve.
///
/// While a request is pending the session discards further input; the
/// deferred mutation runs only when the shell calls the matching
/// `fulfill_*` method. Cancelling changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionRequest {
    /// Ask the user for a line of text (text tool placement).
    TextInput { prompt: String, at: Point },
    /// Ask the user to confirm a destructive action.
    Confirm { prompt: String },
}

/// The mutation deferred behind a pending request.
#[derive(Debug, Clone, PartialEq)]
enum PendingAction {
    InsertText { at: Point },
    NewFile,
}

/// Snapshot of session state for the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    pub tool_name: &'static str,
    pub zoom_percent: u32,
    pub shape_count: usize,
}

/// The in-flight pointer gesture.
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    /// Drag-to-draw in progress; both points are in scene coordinates.
    Drawing { start: Point, current: Point },
    /// Pan drag; the anchor is in device coordinates.
    Panning { last_device: Point },
    /// Dragging a shape; `original` is the shape as it was at grab time so
    /// each move is computed from the grab delta, not accumulated.
    MovingObject {
        id: ShapeId,
        grab: Point,
        original: Shape,
    },
}

/// An interactive drawing session.
pub struct Session {
    scene: Scene,
    view: ViewState,
    history: History,
    tool: ToolKind,
    style: ShapeStyle,
    gesture: Gesture,
    clipboard: Option<Shape>,
    pending: Option<(SessionRequest, PendingAction)>,
    notices: Vec<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with an empty scene on the default sheet.
    pub fn new() -> Self {
        let scene = Scene::new();
        let view = ViewState::new();
        let history = History::new(&scene, &view);
        Self {
            scene,
            view,
            history,
            tool: ToolKind::default(),
            style: ShapeStyle::default(),
            gesture: Gesture::Idle,
            clipboard: None,
            pending: None,
            notices: Vec::new(),
        }
    }

    // --- state access ---------------------------------------------------

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    /// The request awaiting shell resolution, if any.
    pub fn pending_request(&self) -> Option<&SessionRequest> {
        self.pending.as_ref().map(|(req, _)| req)
    }

    /// The live preview shape while a draw gesture is in progress.
    pub fn preview_shape(&self) -> Option<Shape> {
        match &self.gesture {
            Gesture::Drawing { start, current } => {
                self.tool.create_shape(*start, *current, &self.style)
            }
            _ => None,
        }
    }

    /// Drain the queued transient messages.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Summary for the status bar.
    pub fn status(&self) -> StatusSummary {
        StatusSummary {
            tool_name: self.tool.display_name(),
            zoom_percent: self.view.zoom_percent(),
            shape_count: self.scene.len(),
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn record_snapshot(&mut self) {
        self.history.record(&self.scene, &self.view);
        debug!(
            "history: {}/{} snapshots",
            self.history.index() + 1,
            self.history.len()
        );
    }

    // --- pointer events -------------------------------------------------

    /// Handle a pointer press at a device-space point.
    pub fn pointer_down(&mut self, device: Point, button: MouseButton, _modifiers: Modifiers) {
        if self.pending.is_some() {
            debug!("pointer_down discarded: request pending");
            return;
        }
        if self.gesture != Gesture::Idle {
            return;
        }

        // The wheel button pans regardless of the active tool.
        if button == MouseButton::Middle {
            self.gesture = Gesture::Panning {
                last_device: device,
            };
            return;
        }

        let scene_pt = self.view.screen_to_scene(device);

        match self.tool {
            ToolKind::Select => {
                self.select_at(scene_pt);
            }
            ToolKind::Text => {
                self.pending = Some((
                    SessionRequest::TextInput {
                        prompt: "Enter text:".to_string(),
                        at: scene_pt,
                    },
                    PendingAction::InsertText { at: scene_pt },
                ));
            }
            ToolKind::Pan => {
                self.gesture = Gesture::Panning {
                    last_device: device,
                };
            }
            ToolKind::MoveObject => {
                self.select_at(scene_pt);
                if let Some(shape) = self.scene.selected_shape() {
                    self.gesture = Gesture::MovingObject {
                        id: shape.id(),
                        grab: scene_pt,
                        original: shape.clone(),
                    };
                }
            }
            tool if tool.is_drawing_tool() => {
                let start = self.view.snap(scene_pt);
                self.gesture = Gesture::Drawing {
                    start,
                    current: start,
                };
            }
            // Placeholder tools pick a target but edit nothing yet.
            _ => {
                self.select_at(scene_pt);
            }
        }
    }

    /// Handle pointer motion at a device-space point.
    pub fn pointer_move(&mut self, device: Point) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Panning { last_device } => {
                let delta = device - *last_device;
                *last_device = device;
                self.view.pan(delta);
            }
            Gesture::MovingObject { id, grab, original } => {
                let delta = self.view.screen_to_scene(device) - *grab;
                let mut moved = original.clone();
                moved.move_by(delta);
                let id = *id;
                if let Some(slot) = self.scene.shape_mut(id) {
                    *slot = moved;
                }
            }
            Gesture::Drawing { current, .. } => {
                *current = self.view.snap(self.view.screen_to_scene(device));
            }
        }
    }

    /// Handle pointer release at a device-space point.
    pub fn pointer_up(&mut self, device: Point) {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => {}
            Gesture::Panning { .. } => {
                // View-only change, not undoable.
            }
            Gesture::MovingObject { .. } => {
                // One snapshot for the whole drag.
                self.record_snapshot();
            }
            Gesture::Drawing { start, .. } => {
                let end = self.view.snap(self.view.screen_to_scene(device));
                if let Some(shape) = self.tool.create_shape(start, end, &self.style) {
                    self.scene.add_shape(shape);
                    self.record_snapshot();
                }
            }
        }
    }

    /// Handle a wheel event. Zooms at the cursor while Ctrl is held;
    /// ignored otherwise so page scrolling stays with the shell.
    pub fn wheel(&mut self, device: Point, delta_y: f64, modifiers: Modifiers) {
        if !modifiers.ctrl {
            return;
        }
        let factor = if delta_y > 0.0 {
            view::WHEEL_ZOOM_OUT
        } else {
            view::WHEEL_ZOOM_IN
        };
        self.view.zoom_at(device, factor);
    }

    /// Handle a bound key press.
    pub fn key(&mut self, key: Key) {
        match key {
            Key::Delete => self.delete_selected(),
            Key::Escape => self.scene.clear_selection(),
            Key::Undo => self.undo(),
            Key::Redo => self.redo(),
        }
    }

    fn select_at(&mut self, scene_pt: Point) {
        match self.scene.topmost_hit(scene_pt) {
            Some(id) => self.scene.select(id),
            None => self.scene.clear_selection(),
        }
    }

    // --- commands -------------------------------------------------------

    /// Switch the active tool. An in-flight gesture is abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.gesture = Gesture::Idle;
        self.tool = tool;
    }

    /// Switch the sheet format. Shapes keep their scene coordinates; ones
    /// outside the new frame simply fall off the sheet.
    pub fn set_format(&mut self, format: PaperFormat) {
        self.view.format = format;
        self.notify(Notice::info(format!(
            "Sheet format set to {}",
            format.display_name()
        )));
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom(view::BUTTON_ZOOM_IN);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom(view::BUTTON_ZOOM_OUT);
    }

    pub fn reset_zoom(&mut self) {
        self.view.reset();
    }

    pub fn toggle_grid(&mut self) {
        self.view.grid_visible = !self.view.grid_visible;
    }

    pub fn toggle_snap(&mut self) {
        self.view.snap_enabled = !self.view.snap_enabled;
    }

    /// Step back one history snapshot.
    pub fn undo(&mut self) {
        match self.history.undo() {
            Some(snapshot) => {
                self.scene = snapshot.scene;
                self.view = snapshot.view;
                info!("undo: restored snapshot {}", self.history.index());
            }
            None => self.notify(Notice::info("Nothing to undo")),
        }
    }

    /// Step forward one history snapshot.
    pub fn redo(&mut self) {
        match self.history.redo() {
            Some(snapshot) => {
                self.scene = snapshot.scene;
                self.view = snapshot.view;
                info!("redo: restored snapshot {}", self.history.index());
            }
            None => self.notify(Notice::info("Nothing to redo")),
        }
    }

    /// Delete the selected shape. Without a selection this is a no-op and
    /// adds no history entry.
    pub fn delete_selected(&mut self) {
        match self.scene.selected() {
            Some(id) => {
                self.scene.remove_shape(id);
                self.record_snapshot();
            }
            None => self.notify(Notice::warning("No shape selected")),
        }
    }

    /// Select the topmost shape.
    pub fn select_topmost(&mut self) {
        match self.scene.topmost() {
            Some(id) => self.scene.select(id),
            None => self.notify(Notice::info("Nothing to select")),
        }
    }

    pub fn clear_selection(&mut self) {
        self.scene.clear_selection();
    }

    /// Copy the selected shape to the clipboard.
    pub fn copy_selected(&mut self) {
        match self.scene.selected_shape() {
            Some(shape) => {
                self.clipboard = Some(shape.clone());
                self.notify(Notice::info("Shape copied"));
            }
            None => self.notify(Notice::warning("No shape selected")),
        }
    }

    /// Copy the selected shape to the clipboard and remove it.
    pub fn cut_selected(&mut self) {
        match self.scene.selected_shape() {
            Some(shape) => {
                self.clipboard = Some(shape.clone());
                let id = shape.id();
                self.scene.remove_shape(id);
                self.record_snapshot();
                self.notify(Notice::info("Shape cut"));
            }
            None => self.notify(Notice::warning("No shape selected")),
        }
    }

    /// Paste the clipboard shape, offset so the copy is visible, under a
    /// fresh id.
    pub fn paste(&mut self) {
        match &self.clipboard {
            Some(shape) => {
                let mut copy = shape.clone();
                copy.move_by(PASTE_OFFSET);
                copy.regenerate_id();
                self.scene.add_shape(copy);
                self.record_snapshot();
                self.notify(Notice::info("Shape pasted"));
            }
            None => self.notify(Notice::warning("Clipboard is empty")),
        }
    }

    /// Apply the property editor's values to the selected shape.
    ///
    /// The stroke width applies to any kind; length and angle re-anchor a
    /// line's endpoint in polar form. A value that fails to parse aborts
    /// the whole edit with no state change.
    pub fn apply_line_properties(&mut self, length: &str, angle: &str, width: &str) {
        let Some(width) = parse_field(width) else {
            self.notify(Notice::error(format!("Invalid width: {width:?}")));
            return;
        };

        let polar = match (parse_field(length), parse_field(angle)) {
            (Some(len), Some(ang)) => Some((len, ang)),
            // Both blank: width-only edit.
            (None, None) if length.trim().is_empty() && angle.trim().is_empty() => None,
            _ => {
                self.notify(Notice::error("Invalid length or angle"));
                return;
            }
        };

        let Some(shape) = self.scene.selected_shape_mut() else {
            self.notify(Notice::warning("No shape selected"));
            return;
        };

        shape.style_mut().stroke_width = width;
        if let (Shape::Line(line), Some((len, ang))) = (shape, polar) {
            line.set_polar(len, ang);
        }
        self.record_snapshot();
    }

    /// Ask to start over. The scene is cleared only after the shell
    /// confirms via [`Session::fulfill_confirm`].
    pub fn new_file(&mut self) {
        self.pending = Some((
            SessionRequest::Confirm {
                prompt: "Create a new file? Unsaved changes will be lost.".to_string(),
            },
            PendingAction::NewFile,
        ));
    }

    // --- request fulfillment --------------------------------------------

    /// Resolve a pending text request. `None` or an empty string cancels.
    pub fn fulfill_text_input(&mut self, text: Option<String>) {
        match self.pending.take() {
            Some((SessionRequest::TextInput { .. }, PendingAction::InsertText { at })) => {
                let Some(content) = text.filter(|t| !t.is_empty()) else {
                    return;
                };
                let mut shape = Text::new(at, content);
                shape.style = self.style.clone();
                self.scene.add_shape(Shape::Text(shape));
                self.record_snapshot();
            }
            other => {
                warn!("fulfill_text_input without a pending text request");
                self.pending = other;
            }
        }
    }

    /// Resolve a pending confirmation. `false` cancels.
    pub fn fulfill_confirm(&mut self, confirmed: bool) {
        match self.pending.take() {
            Some((SessionRequest::Confirm { .. }, PendingAction::NewFile)) => {
                if !confirmed {
                    return;
                }
                self.scene.clear();
                self.view.reset();
                self.record_snapshot();
                self.notify(Notice::info("New file created"));
            }
            other => {
                warn!("fulfill_confirm without a pending confirmation");
                self.pending = other;
            }
        }
    }

    // --- document I/O ---------------------------------------------------

    /// Serialize the scene as a document.
    pub fn save_document(&self) -> Result<String, DocumentError> {
        DrawingFile::from_session(&self.scene, &self.view).to_json()
    }

    /// Load a document, replacing the scene wholesale.
    ///
    /// On a parse error nothing changes. On success the selection is
    /// cleared, the view resets, and history restarts from the loaded
    /// state.
    pub fn load_document(&mut self, json: &str) -> Result<(), DocumentError> {
        let file = DrawingFile::from_json(json)?;
        info!("loading document with {} shapes", file.shapes.len());

        if let Some(format) = file.matching_format() {
            self.view.format = format;
        }
        self.scene.replace_shapes(file.shapes);
        self.view.reset();
        self.gesture = Gesture::Idle;
        self.history.reset(&self.scene, &self.view);
        Ok(())
    }
}

/// Parse a numeric property field; blank yields None.
fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeGeometry;

    fn draw_line(session: &mut Session, from: Point, to: Point) {
        session.set_tool(ToolKind::Line);
        session.pointer_down(from, MouseButton::Left, Modifiers::NONE);
        session.pointer_move(to);
        session.pointer_up(to);
    }

    #[test]
    fn test_draw_line_end_to_end() {
        let mut session = Session::new();
        draw_line(&mut session, Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        assert_eq!(session.scene().len(), 1);
        match &session.scene().shapes()[0] {
            Shape::Line(line) => {
                assert!((line.length() - 100.0).abs() < 1e-9);
                assert!(line.angle_degrees().abs() < 1e-9);
            }
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_drawing_records_one_snapshot() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(50.0, 0.0));

        session.undo();
        assert_eq!(session.scene().len(), 0);
        session.redo();
        assert_eq!(session.scene().len(), 1);
    }

    #[test]
    fn test_preview_during_drag() {
        let mut session = Session::new();
        session.set_tool(ToolKind::Rectangle);
        assert!(session.preview_shape().is_none());

        session.pointer_down(Point::ZERO, MouseButton::Left, Modifiers::NONE);
        session.pointer_move(Point::new(60.0, 40.0));
        let preview = session.preview_shape().unwrap();
        match preview {
            Shape::Rectangle(r) => assert_eq!(r.end, Point::new(60.0, 40.0)),
            other => panic!("expected a rectangle, got {}", other.kind_name()),
        }

        session.pointer_up(Point::new(60.0, 40.0));
        assert!(session.preview_shape().is_none());
    }

    #[test]
    fn test_middle_button_pans_with_any_tool() {
        let mut session = Session::new();
        session.set_tool(ToolKind::Line);
        session.pointer_down(Point::new(100.0, 100.0), MouseButton::Middle, Modifiers::NONE);
        session.pointer_move(Point::new(130.0, 90.0));
        session.pointer_up(Point::new(130.0, 90.0));

        assert_eq!(session.view().offset, Vec2::new(30.0, -10.0));
        assert_eq!(session.scene().len(), 0);
        // Panning is not undoable
        session.undo();
        assert!(session.take_notices().iter().any(|n| n.message.contains("undo")));
    }

    #[test]
    fn test_move_object_single_snapshot() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));

        session.set_tool(ToolKind::MoveObject);
        session.pointer_down(Point::new(50.0, 0.0), MouseButton::Left, Modifiers::NONE);
        session.pointer_move(Point::new(60.0, 10.0));
        session.pointer_move(Point::new(70.0, 20.0));
        session.pointer_up(Point::new(70.0, 20.0));

        match &session.scene().shapes()[0] {
            Shape::Line(line) => {
                assert_eq!(line.start, Point::new(20.0, 20.0));
                assert!((line.length() - 100.0).abs() < 1e-9);
            }
            other => panic!("expected a line, got {}", other.kind_name()),
        }

        // The whole drag is one undo step
        session.undo();
        match &session.scene().shapes()[0] {
            Shape::Line(line) => assert_eq!(line.start, Point::ZERO),
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_select_and_delete() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));

        session.set_tool(ToolKind::Select);
        session.pointer_down(Point::new(50.0, 3.0), MouseButton::Left, Modifiers::NONE);
        assert!(session.scene().selected().is_some());

        session.key(Key::Delete);
        assert_eq!(session.scene().len(), 0);
    }

    #[test]
    fn test_delete_without_selection_adds_no_history() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));
        session.clear_selection();

        session.delete_selected();
        assert_eq!(session.scene().len(), 1);
        let notices = session.take_notices();
        assert!(notices.iter().any(|n| n.kind == NoticeKind::Warning));

        // One undo goes back to the empty scene, proving no extra entry
        session.undo();
        assert_eq!(session.scene().len(), 0);
    }

    #[test]
    fn test_escape_clears_selection() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));
        assert!(session.scene().selected().is_some());
        session.key(Key::Escape);
        assert!(session.scene().selected().is_none());
    }

    #[test]
    fn test_wheel_zoom_requires_ctrl() {
        let mut session = Session::new();
        session.wheel(Point::new(100.0, 100.0), -1.0, Modifiers::NONE);
        assert_eq!(session.view().scale, 1.0);

        session.wheel(Point::new(100.0, 100.0), -1.0, Modifiers::CTRL);
        assert!((session.view().scale - 1.1).abs() < 1e-12);

        session.wheel(Point::new(100.0, 100.0), 1.0, Modifiers::CTRL);
        assert!((session.view().scale - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_snap_applies_to_drawing() {
        let mut session = Session::new();
        session.toggle_snap();
        draw_line(&mut session, Point::new(3.0, 4.0), Point::new(57.0, 38.0));

        match &session.scene().shapes()[0] {
            Shape::Line(line) => {
                assert_eq!(line.start, Point::ZERO);
                assert_eq!(line.end, Point::new(60.0, 40.0));
            }
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_text_tool_request_flow() {
        let mut session = Session::new();
        session.set_tool(ToolKind::Text);
        session.pointer_down(Point::new(200.0, 150.0), MouseButton::Left, Modifiers::NONE);

        match session.pending_request() {
            Some(SessionRequest::TextInput { at, .. }) => {
                assert_eq!(*at, Point::new(200.0, 150.0));
            }
            other => panic!("expected a text request, got {other:?}"),
        }

        // Input is discarded while the request is open
        session.pointer_down(Point::new(10.0, 10.0), MouseButton::Left, Modifiers::NONE);
        session.pointer_up(Point::new(10.0, 10.0));
        assert_eq!(session.scene().len(), 0);

        session.fulfill_text_input(Some("Note A".to_string()));
        assert_eq!(session.scene().len(), 1);
        assert!(session.pending_request().is_none());
    }

    #[test]
    fn test_text_cancel_changes_nothing() {
        let mut session = Session::new();
        session.set_tool(ToolKind::Text);
        session.pointer_down(Point::new(50.0, 50.0), MouseButton::Left, Modifiers::NONE);
        session.fulfill_text_input(None);
        assert_eq!(session.scene().len(), 0);
        assert!(session.pending_request().is_none());
    }

    #[test]
    fn test_new_file_confirm_flow() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));
        session.zoom_in();

        session.new_file();
        session.fulfill_confirm(false);
        assert_eq!(session.scene().len(), 1);

        session.new_file();
        session.fulfill_confirm(true);
        assert_eq!(session.scene().len(), 0);
        assert_eq!(session.view().scale, 1.0);
    }

    #[test]
    fn test_copy_paste_offsets_and_renames() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));
        let original_id = session.scene().shapes()[0].id();

        session.copy_selected();
        session.paste();

        assert_eq!(session.scene().len(), 2);
        let copy = &session.scene().shapes()[1];
        assert_ne!(copy.id(), original_id);
        match copy {
            Shape::Line(line) => assert_eq!(line.start, Point::new(20.0, 20.0)),
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_cut_then_paste() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));

        session.cut_selected();
        assert_eq!(session.scene().len(), 0);
        session.paste();
        assert_eq!(session.scene().len(), 1);
    }

    #[test]
    fn test_paste_empty_clipboard_notices() {
        let mut session = Session::new();
        session.paste();
        assert!(session
            .take_notices()
            .iter()
            .any(|n| n.kind == NoticeKind::Warning));
    }

    #[test]
    fn test_format_switch_keeps_scene_coordinates() {
        let mut session = Session::new();
        draw_line(&mut session, Point::new(100.0, 100.0), Point::new(200.0, 100.0));

        session.set_format(PaperFormat::A3Landscape);
        match &session.scene().shapes()[0] {
            Shape::Line(line) => {
                assert_eq!(line.start, Point::new(100.0, 100.0));
                assert_eq!(line.end, Point::new(200.0, 100.0));
            }
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_apply_line_properties() {
        let mut session = Session::new();
        draw_line(&mut session, Point::new(10.0, 20.0), Point::new(60.0, 20.0));

        session.apply_line_properties("100", "0", "2.5");
        match &session.scene().shapes()[0] {
            Shape::Line(line) => {
                assert!((line.length() - 100.0).abs() < 1e-9);
                assert_eq!(line.style.stroke_width, 2.5);
            }
            other => panic!("expected a line, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_apply_properties_parse_failure_aborts() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));

        session.apply_line_properties("abc", "0", "2.0");
        match &session.scene().shapes()[0] {
            Shape::Line(line) => {
                assert!((line.length() - 100.0).abs() < 1e-9);
                assert_eq!(line.style.stroke_width, 1.0);
            }
            other => panic!("expected a line, got {}", other.kind_name()),
        }
        assert!(session
            .take_notices()
            .iter()
            .any(|n| n.kind == NoticeKind::Error));
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));
        session.set_format(PaperFormat::A3Landscape);

        let json = session.save_document().unwrap();

        let mut restored = Session::new();
        restored.load_document(&json).unwrap();
        assert_eq!(restored.scene().len(), 1);
        assert_eq!(restored.view().format, PaperFormat::A3Landscape);
        assert!(restored.scene().selected().is_none());
        // History restarts from the loaded state
        restored.undo();
        assert_eq!(restored.scene().len(), 1);
    }

    #[test]
    fn test_load_failure_leaves_state() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));

        assert!(session.load_document("{ not json").is_err());
        assert_eq!(session.scene().len(), 1);
    }

    #[test]
    fn test_undo_at_floor_notices() {
        let mut session = Session::new();
        session.undo();
        session.redo();
        let notices = session.take_notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.kind == NoticeKind::Info));
    }

    #[test]
    fn test_placeholder_tool_selects_without_mutation() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(100.0, 0.0));
        let before = session.scene().shapes().to_vec();

        session.set_tool(ToolKind::Rotate);
        session.pointer_down(Point::new(50.0, 2.0), MouseButton::Left, Modifiers::NONE);
        session.pointer_move(Point::new(70.0, 30.0));
        session.pointer_up(Point::new(70.0, 30.0));

        assert!(session.scene().selected().is_some());
        assert_eq!(session.scene().shapes(), &before[..]);
    }

    #[test]
    fn test_circle_move_resets_rim() {
        let mut session = Session::new();
        session.set_tool(ToolKind::Circle);
        session.pointer_down(Point::new(100.0, 100.0), MouseButton::Left, Modifiers::NONE);
        session.pointer_up(Point::new(100.0, 150.0));

        session.set_tool(ToolKind::MoveObject);
        session.pointer_down(Point::new(100.0, 150.0), MouseButton::Left, Modifiers::NONE);
        session.pointer_move(Point::new(110.0, 150.0));
        session.pointer_up(Point::new(110.0, 150.0));

        match &session.scene().shapes()[0] {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, Point::new(110.0, 100.0));
                assert_eq!(circle.rim, Point::new(160.0, 100.0));
                assert!((circle.radius() - 50.0).abs() < 1e-9);
            }
            other => panic!("expected a circle, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_select_topmost() {
        let mut session = Session::new();
        draw_line(&mut session, Point::ZERO, Point::new(10.0, 0.0));
        draw_line(&mut session, Point::new(0.0, 50.0), Point::new(10.0, 50.0));
        let top_id = session.scene().shapes()[1].id();

        session.clear_selection();
        session.select_topmost();
        assert_eq!(session.scene().selected(), Some(top_id));
    }
}
