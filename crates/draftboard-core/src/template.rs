//! Sheet templates: paper formats, frame, and title block geometry.

use kurbo::{Line as KurboLine, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Paper format of the drawing sheet.
///
/// Each format carries a fixed sheet size in scene units and a template
/// scale factor applied to the frame margin and title block ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperFormat {
    #[default]
    A4Landscape,
    A4Portrait,
    A3Landscape,
    A3Portrait,
    A2Landscape,
    A2Portrait,
    A1Landscape,
    A1Portrait,
}

impl PaperFormat {
    /// All formats, in size order.
    pub const ALL: [PaperFormat; 8] = [
        PaperFormat::A4Landscape,
        PaperFormat::A4Portrait,
        PaperFormat::A3Landscape,
        PaperFormat::A3Portrait,
        PaperFormat::A2Landscape,
        PaperFormat::A2Portrait,
        PaperFormat::A1Landscape,
        PaperFormat::A1Portrait,
    ];

    /// Sheet size in scene units.
    pub fn size(&self) -> Size {
        match self {
            PaperFormat::A4Landscape => Size::new(800.0, 600.0),
            PaperFormat::A4Portrait => Size::new(600.0, 800.0),
            PaperFormat::A3Landscape => Size::new(1200.0, 800.0),
            PaperFormat::A3Portrait => Size::new(800.0, 1200.0),
            PaperFormat::A2Landscape => Size::new(1600.0, 1200.0),
            PaperFormat::A2Portrait => Size::new(1200.0, 1600.0),
            PaperFormat::A1Landscape => Size::new(2000.0, 1600.0),
            PaperFormat::A1Portrait => Size::new(1600.0, 2000.0),
        }
    }

    /// Template scale factor for margins and title block ruling.
    pub fn template_scale(&self) -> f64 {
        match self {
            PaperFormat::A4Landscape | PaperFormat::A4Portrait => 1.0,
            PaperFormat::A3Landscape | PaperFormat::A3Portrait => 1.5,
            PaperFormat::A2Landscape | PaperFormat::A2Portrait => 2.0,
            PaperFormat::A1Landscape | PaperFormat::A1Portrait => 2.5,
        }
    }

    /// Display name, e.g. "A4 (landscape)".
    pub fn display_name(&self) -> &'static str {
        match self {
            PaperFormat::A4Landscape => "A4 (landscape)",
            PaperFormat::A4Portrait => "A4 (portrait)",
            PaperFormat::A3Landscape => "A3 (landscape)",
            PaperFormat::A3Portrait => "A3 (portrait)",
            PaperFormat::A2Landscape => "A2 (landscape)",
            PaperFormat::A2Portrait => "A2 (portrait)",
            PaperFormat::A1Landscape => "A1 (landscape)",
            PaperFormat::A1Portrait => "A1 (portrait)",
        }
    }
}

/// A positioned label inside the title block.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLabel {
    /// Center of the label cell.
    pub center: Point,
    pub text: &'static str,
    /// Font size in scene units.
    pub font_size: f64,
}

/// Pure geometry of a drawing sheet template.
///
/// Computed once per format; the renderer strokes the rules and places the
/// labels. Nothing here touches the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTemplate {
    pub format: PaperFormat,
    /// Full sheet rectangle, origin at (0, 0).
    pub sheet: Rect,
    /// Outer frame, inset from the sheet edge.
    pub frame: Rect,
    /// Title block outline, anchored bottom-right inside the frame.
    pub title_block: Rect,
    /// Interior ruling of the title block.
    pub rules: Vec<KurboLine>,
    /// Labels with their cell centers.
    pub labels: Vec<TemplateLabel>,
}

/// Frame margin at template scale 1.
const FRAME_MARGIN: f64 = 20.0;
/// Title block size at template scale 1.
const BLOCK_WIDTH: f64 = 140.0;
const BLOCK_HEIGHT: f64 = 55.0;
/// Title block row height at template scale 1.
const ROW_HEIGHT: f64 = 11.0;
/// Width of the revision column at template scale 1.
const LEFT_COL_WIDTH: f64 = 20.0;
/// Interior column widths right of the revision column, scale 1.
const COL_WIDTHS: [f64; 6] = [20.0, 25.0, 25.0, 25.0, 25.0, 20.0];
/// Label font size at template scale 1.
const LABEL_FONT_SIZE: f64 = 8.0;

const LEFT_LABELS: [&str; 5] = ["Rev.", "Sheet", "Doc. no.", "Sign.", "Date"];
const ROLE_LABELS: [&str; 5] = ["Drawn", "Checked", "T. check", "N. check", "Appr."];

impl SheetTemplate {
    /// Build the template geometry for a format.
    pub fn new(format: PaperFormat) -> Self {
        let size = format.size();
        let s = format.template_scale();

        let sheet = Rect::new(0.0, 0.0, size.width, size.height);
        let margin = FRAME_MARGIN * s;
        let frame = Rect::new(
            margin,
            margin,
            size.width - margin,
            size.height - margin,
        );

        let block_w = BLOCK_WIDTH * s;
        let block_h = BLOCK_HEIGHT * s;
        let title_block = Rect::new(
            frame.x1 - block_w,
            frame.y1 - block_h,
            frame.x1,
            frame.y1,
        );

        let row_h = ROW_HEIGHT * s;
        let left_col = LEFT_COL_WIDTH * s;
        let mut rules = Vec::new();

        // Revision column separator
        rules.push(KurboLine::new(
            Point::new(title_block.x0 + left_col, title_block.y0),
            Point::new(title_block.x0 + left_col, title_block.y1),
        ));

        // Four full-width row rules (five rows)
        for i in 1..=4 {
            let y = title_block.y0 + i as f64 * row_h;
            rules.push(KurboLine::new(
                Point::new(title_block.x0, y),
                Point::new(title_block.x1, y),
            ));
        }

        // Interior column rules right of the revision column
        let mut x = title_block.x0 + left_col;
        for w in COL_WIDTHS {
            x += w * s;
            rules.push(KurboLine::new(
                Point::new(x, title_block.y0),
                Point::new(x, title_block.y1),
            ));
        }

        let font_size = LABEL_FONT_SIZE * s;
        let mut labels = Vec::new();

        for (i, text) in LEFT_LABELS.iter().enumerate() {
            labels.push(TemplateLabel {
                center: Point::new(
                    title_block.x0 + left_col / 2.0,
                    title_block.y0 + (i as f64 + 0.5) * row_h,
                ),
                text,
                font_size,
            });
        }

        let mut label_x = title_block.x0 + left_col + 12.5 * s;
        for (i, text) in ROLE_LABELS.iter().enumerate() {
            labels.push(TemplateLabel {
                center: Point::new(label_x, title_block.y0 + (i as f64 + 0.5) * row_h),
                text,
                font_size,
            });
            label_x += 25.0 * s;
        }

        let right_x = title_block.x0 + left_col + 125.0 * s;
        for (i, text) in ["Lit.", "Mass", "Scale", "1:1", "Sheet", "Sheets"]
            .iter()
            .enumerate()
        {
            labels.push(TemplateLabel {
                center: Point::new(right_x, title_block.y0 + (i as f64 + 0.5) * row_h),
                text,
                font_size,
            });
        }

        Self {
            format,
            sheet,
            frame,
            title_block,
            rules,
            labels,
        }
    }
}
