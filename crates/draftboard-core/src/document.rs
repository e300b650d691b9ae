//! Document serialization: the JSON save/load format.

use crate::scene::Scene;
use crate::shapes::Shape;
use crate::template::PaperFormat;
use crate::view::ViewState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suggested filename for saved drawings.
pub const SAVE_FILENAME: &str = "drawing.json";

/// Errors from document save/load.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse document: {0}")]
    Parse(#[source] serde_json::Error),
}

/// The on-disk document: the shape list plus the sheet dimensions it was
/// drawn on. View and history state are session-local and not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingFile {
    pub shapes: Vec<Shape>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl DrawingFile {
    /// Capture the current session state as a document.
    pub fn from_session(scene: &Scene, view: &ViewState) -> Self {
        let size = view.format.size();
        Self {
            shapes: scene.shapes().to_vec(),
            canvas_width: size.width,
            canvas_height: size.height,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(DocumentError::Parse)
    }

    /// The paper format whose sheet matches the stored dimensions, if any.
    pub fn matching_format(&self) -> Option<PaperFormat> {
        PaperFormat::ALL.into_iter().find(|f| {
            let size = f.size();
            size.width == self.canvas_width && size.height == self.canvas_height
        })
    }
}
