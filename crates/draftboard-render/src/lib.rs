//! Draftboard Render Library
//!
//! Stateless rendering for the Draftboard drawing surface. The default
//! implementation builds a backend-agnostic display list a shell replays
//! against its drawing surface.

mod display;
mod renderer;

pub use display::{DisplayItem, DisplayList, TextAnchor};
pub use renderer::{
    DisplayListRenderer, RenderContext, RenderResult, Renderer, RendererError,
};
