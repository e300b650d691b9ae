//! Input vocabulary consumed by the session.
//!
//! The shell translates its native events into these types; the session
//! never sees platform event structs.

use serde::{Deserialize, Serialize};

/// Mouse buttons the session distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    /// Wheel press; always pans regardless of the active tool.
    Middle,
    Right,
}

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// Keys with session-level bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Escape,
    /// Ctrl+Z
    Undo,
    /// Ctrl+Y
    Redo,
}
