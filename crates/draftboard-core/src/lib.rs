//! Draftboard Core Library
//!
//! Platform-agnostic scene model and interaction engine for the Draftboard
//! technical drawing surface.

pub mod document;
pub mod history;
pub mod input;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod template;
pub mod tools;
pub mod view;

pub use document::{DrawingFile, DocumentError, SAVE_FILENAME};
pub use history::{History, Snapshot, DEFAULT_HISTORY_CAPACITY};
pub use input::{Key, Modifiers, MouseButton};
pub use scene::Scene;
pub use session::{Notice, NoticeKind, Session, SessionRequest, StatusSummary};
pub use template::{PaperFormat, SheetTemplate};
pub use tools::ToolKind;
pub use view::ViewState;
