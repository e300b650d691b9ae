//! Linear snapshot history for undo/redo.

use crate::scene::Scene;
use crate::view::ViewState;

/// Default number of snapshots retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A full copy of the undoable state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub scene: Scene,
    pub view: ViewState,
}

/// Linear undo/redo history.
///
/// Entries form a single timeline with a cursor. Recording after an undo
/// truncates the abandoned branch; when the timeline exceeds capacity the
/// oldest entry is evicted. Snapshots are cloned both in and out, so live
/// state never aliases a stored entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    /// Index of the current snapshot in `entries`.
    index: usize,
    capacity: usize,
}

impl History {
    /// Create a history seeded with the initial state.
    pub fn new(scene: &Scene, view: &ViewState) -> Self {
        Self::with_capacity(scene, view, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history with an explicit capacity (at least 1).
    pub fn with_capacity(scene: &Scene, view: &ViewState, capacity: usize) -> Self {
        Self {
            entries: vec![Snapshot {
                scene: scene.clone(),
                view: view.clone(),
            }],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record the state after a completed mutation.
    ///
    /// Discards any redo branch beyond the cursor, then appends. On
    /// overflow the oldest entry is dropped and the cursor shifts with it.
    pub fn record(&mut self, scene: &Scene, view: &ViewState) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Snapshot {
            scene: scene.clone(),
            view: view.clone(),
        });
        self.index += 1;

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.index -= 1;
        }
    }

    /// Step back one snapshot. Returns None when already at the oldest.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// Step forward one snapshot. Returns None when already at the newest.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Reset the timeline to a single snapshot of the given state.
    pub fn reset(&mut self, scene: &Scene, view: &ViewState) {
        self.entries.clear();
        self.entries.push(Snapshot {
            scene: scene.clone(),
            view: view.clone(),
        });
        self.index = 0;
    }

    /// Number of snapshots in the timeline.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position in the timeline.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Shape};
    use kurbo::Point;

    fn scene_with_lines(n: usize) -> Scene {
        let mut scene = Scene::new();
        for i in 0..n {
            scene.add_shape(Shape::Line(Line::new(
                Point::new(i as f64, 0.0),
                Point::new(i as f64, 10.0),
            )));
        }
        scene
    }

    #[test]
    fn test_seeded_with_initial_state() {
        let history = History::new(&Scene::new(), &ViewState::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let view = ViewState::new();
        let empty = Scene::new();
        let one = scene_with_lines(1);

        let mut history = History::new(&empty, &view);
        history.record(&one, &view);

        let back = history.undo().unwrap();
        assert_eq!(back.scene, empty);

        let forward = history.redo().unwrap();
        assert_eq!(forward.scene, one);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_oldest_is_none() {
        let mut history = History::new(&Scene::new(), &ViewState::new());
        assert!(history.undo().is_none());
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn test_record_prunes_redo_branch() {
        let view = ViewState::new();
        let mut history = History::new(&Scene::new(), &view);
        history.record(&scene_with_lines(1), &view);
        history.record(&scene_with_lines(2), &view);

        history.undo().unwrap();
        history.record(&scene_with_lines(3), &view);

        assert!(!history.can_redo());
        assert_eq!(history.len(), 3);
        // The new branch tip is the three-line scene, not the pruned one
        let back = history.undo().unwrap();
        assert_eq!(back.scene.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let view = ViewState::new();
        let mut history = History::with_capacity(&Scene::new(), &view, 3);
        history.record(&scene_with_lines(1), &view);
        history.record(&scene_with_lines(2), &view);
        history.record(&scene_with_lines(3), &view);

        assert_eq!(history.len(), 3);
        // Walk back to the oldest surviving entry: the empty seed is gone,
        // the one-line scene is now the floor.
        let mut oldest = None;
        while let Some(snap) = history.undo() {
            oldest = Some(snap);
        }
        assert_eq!(oldest.unwrap().scene.len(), 1);
    }

    #[test]
    fn test_snapshots_do_not_alias_live_state() {
        let view = ViewState::new();
        let mut scene = scene_with_lines(1);
        let mut history = History::new(&scene, &view);

        scene.clear();
        history.record(&scene, &view);

        let back = history.undo().unwrap();
        assert_eq!(back.scene.len(), 1);
    }

    #[test]
    fn test_reset() {
        let view = ViewState::new();
        let mut history = History::new(&Scene::new(), &view);
        history.record(&scene_with_lines(1), &view);
        history.record(&scene_with_lines(2), &view);

        history.reset(&scene_with_lines(5), &view);
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
