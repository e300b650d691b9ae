//! Renderer abstraction and the display-list implementation.

use crate::display::{DisplayList, TextAnchor};
use draftboard_core::shapes::Shape;
use draftboard_core::template::SheetTemplate;
use draftboard_core::Session;
use kurbo::{BezPath, Point, Shape as KurboShape, Size};
use log::trace;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Font size of the dimension length label, in scene units.
const DIMENSION_LABEL_SIZE: f64 = 12.0;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The session to render.
    pub session: &'a Session,
    /// Viewport size in device units, for shell-side clipping.
    pub viewport_size: Size,
    /// Background color of the sheet.
    pub background_color: Color,
    /// Grid line color.
    pub grid_color: Color,
    /// Sheet frame and title block color.
    pub frame_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
    /// Live preview color.
    pub preview_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a render context with the stock palette.
    pub fn new(session: &'a Session, viewport_size: Size) -> Self {
        Self {
            session,
            viewport_size,
            background_color: Color::WHITE,
            grid_color: Color::from_rgba8(224, 224, 224, 255),
            frame_color: Color::from_rgba8(0, 0, 255, 255),
            selection_color: Color::from_rgba8(231, 76, 60, 255),
            preview_color: Color::from_rgba8(52, 152, 219, 255),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection highlight color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// Implementations may rasterize directly or, like
/// [`DisplayListRenderer`], emit a command list for the shell to replay.
pub trait Renderer {
    /// Build the frame for the session state in `ctx`.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Renderer that builds a [`DisplayList`] per frame.
///
/// Stateless with respect to the session: it only reads. The paint order
/// is background, grid, sheet template, shapes, selection highlight, live
/// preview.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    display: Option<DisplayList>,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last built frame.
    pub fn display(&self) -> Option<&DisplayList> {
        self.display.as_ref()
    }

    /// Take ownership of the last built frame.
    pub fn take_display(&mut self) -> Option<DisplayList> {
        self.display.take()
    }

    fn build_grid(list: &mut DisplayList, ctx: &RenderContext, template: &SheetTemplate) {
        let view = ctx.session.view();
        let sheet = template.sheet;
        let step = view.grid_size;
        let mut path = BezPath::new();

        let mut x = 0.0;
        while x <= sheet.width() {
            path.move_to(Point::new(x, 0.0));
            path.line_to(Point::new(x, sheet.height()));
            x += step;
        }
        let mut y = 0.0;
        while y <= sheet.height() {
            path.move_to(Point::new(0.0, y));
            path.line_to(Point::new(sheet.width(), y));
            y += step;
        }

        list.stroke_dashed(path, ctx.grid_color, 0.5, vec![1.0, 1.0]);
    }

    fn build_template(list: &mut DisplayList, ctx: &RenderContext, template: &SheetTemplate) {
        list.stroke(template.frame.to_path(0.1), ctx.frame_color, 2.0);
        list.stroke(template.title_block.to_path(0.1), ctx.frame_color, 2.0);

        let mut rules = BezPath::new();
        for rule in &template.rules {
            rules.move_to(rule.p0);
            rules.line_to(rule.p1);
        }
        list.stroke(rules, ctx.frame_color, 2.0);

        for label in &template.labels {
            list.text(
                label.center,
                label.text,
                label.font_size,
                Color::BLACK,
                TextAnchor::Middle,
            );
        }
    }

    fn build_shape(list: &mut DisplayList, shape: &Shape) {
        let style = shape.style();
        match shape {
            Shape::Text(text) => {
                list.text(
                    text.position,
                    text.content.clone(),
                    text.font_size,
                    style.stroke(),
                    TextAnchor::Start,
                );
            }
            Shape::Dimension(dim) => {
                Self::stroke_styled(list, shape);
                list.text(
                    dim.label_anchor(),
                    dim.label(),
                    DIMENSION_LABEL_SIZE,
                    style.stroke(),
                    TextAnchor::Middle,
                );
            }
            _ => {
                if let Some(fill) = style.fill() {
                    list.fill(shape.to_path(), fill);
                }
                Self::stroke_styled(list, shape);
            }
        }
    }

    fn stroke_styled(list: &mut DisplayList, shape: &Shape) {
        let style = shape.style();
        match style.pattern.dashes() {
            Some(dash) => list.stroke_dashed(
                shape.to_path(),
                style.stroke(),
                style.stroke_width,
                dash.to_vec(),
            ),
            None => list.stroke(shape.to_path(), style.stroke(), style.stroke_width),
        }
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let session = ctx.session;
        let view = session.view();
        let template = SheetTemplate::new(view.format);

        let mut list = DisplayList::new(view.transform());

        list.fill(template.sheet.to_path(0.1), ctx.background_color);

        if view.grid_visible {
            Self::build_grid(&mut list, ctx, &template);
        }
        Self::build_template(&mut list, ctx, &template);

        for shape in session.scene().shapes() {
            Self::build_shape(&mut list, shape);
        }

        // Selection highlight re-strokes the shape on top of it.
        if let Some(shape) = session.scene().selected_shape() {
            list.stroke_dashed(shape.to_path(), ctx.selection_color, 3.0, vec![5.0, 5.0]);
        }

        if let Some(preview) = session.preview_shape() {
            list.stroke_dashed(preview.to_path(), ctx.preview_color, 2.0, vec![5.0, 5.0]);
        }

        trace!("built display list with {} items", list.len());
        self.display = Some(list);
        Ok(())
    }
}
