//! Elements placed on a slide.

use super::geometry::Rect;
use crate::common::RGBColor;
use crate::common::unit::split_evenly;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    /// Value of the DrawingML `algn` attribute.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// A visual element on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Panel(Panel),
    TextBlock(TextBlock),
    Table(Table),
}

impl Element {
    pub fn rect(&self) -> Rect {
        match self {
            Element::Panel(panel) => panel.rect,
            Element::TextBlock(block) => block.rect,
            Element::Table(table) => table.rect,
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            Element::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn as_text_block(&self) -> Option<&TextBlock> {
        match self {
            Element::TextBlock(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Element::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Short name used in logs.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Element::Panel(_) => "panel",
            Element::TextBlock(_) => "text block",
            Element::Table(_) => "table",
        }
    }
}

/// Outline of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub color: RGBColor,
    /// Line width in EMUs; `None` leaves the viewer's hairline default.
    pub width: Option<i64>,
}

impl Border {
    /// Widest line a viewer accepts, 1584 pt in EMUs.
    pub const MAX_WIDTH: i64 = 20_116_800;

    pub fn new(color: RGBColor) -> Self {
        Self { color, width: None }
    }

    pub fn with_width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    /// Whether the width, if any, is within `0..=MAX_WIDTH`.
    pub fn has_valid_width(&self) -> bool {
        self.width.is_none_or(|width| (0..=Self::MAX_WIDTH).contains(&width))
    }
}

/// Requested styling for a new panel.
///
/// A missing fill falls back to the palette's card color; a missing border
/// means the panel has no outline at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelStyle {
    pub fill: Option<RGBColor>,
    pub border: Option<Border>,
}

impl PanelStyle {
    pub fn filled(color: RGBColor) -> Self {
        Self {
            fill: Some(color),
            border: None,
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }
}

/// A filled rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub rect: Rect,
    pub fill: RGBColor,
    pub border: Option<Border>,
}

/// One fully resolved paragraph of a text block.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    /// Font size in points.
    pub size: f64,
    pub color: RGBColor,
    pub bold: bool,
    pub align: Align,
    pub font: String,
    /// Spacing below the paragraph in points.
    pub space_after: Option<f64>,
}

/// A word-wrapped text box holding paragraphs in top-to-bottom order.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub rect: Rect,
    pub paragraphs: Vec<Paragraph>,
}

impl TextBlock {
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}

/// Text and fill styling shared by every cell of a table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    pub fill: RGBColor,
    pub text_color: RGBColor,
    pub bold: bool,
    pub align: Align,
    /// Font size in points.
    pub size: f64,
    pub font: String,
}

/// A rectangular grid of text cells. Row 0 is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rect: Rect,
    pub(crate) cells: Vec<Vec<String>>,
    pub(crate) column_widths: Option<Vec<i64>>,
    pub(crate) header: RowStyle,
    pub(crate) even: RowStyle,
    pub(crate) odd: RowStyle,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }

    /// Explicit column widths, if the caller supplied them.
    pub fn column_widths(&self) -> Option<&[i64]> {
        self.column_widths.as_deref()
    }

    /// Style of row `index`: the header for row 0, then alternating body shades.
    pub fn row_style(&self, index: usize) -> &RowStyle {
        if index == 0 {
            &self.header
        } else if index % 2 == 0 {
            &self.even
        } else {
            &self.odd
        }
    }

    /// Concrete grid column widths: explicit widths, or the width split evenly.
    pub fn grid_column_widths(&self) -> Vec<i64> {
        match &self.column_widths {
            Some(widths) => widths.clone(),
            None => split_evenly(self.rect.width, self.column_count()),
        }
    }

    /// Concrete row heights: the table height split evenly.
    pub fn grid_row_heights(&self) -> Vec<i64> {
        split_evenly(self.rect.height, self.row_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_ooxml() {
        assert_eq!(Align::default(), Align::Left);
        assert_eq!(Align::Center.as_ooxml(), "ctr");
        assert_eq!(Align::Justify.as_ooxml(), "just");
    }

    #[test]
    fn test_border_builder() {
        let border = Border::new(RGBColor::new(1, 2, 3)).with_width(12_700);
        assert_eq!(border.width, Some(12_700));
        let style = PanelStyle::filled(RGBColor::new(9, 9, 9)).with_border(border);
        assert_eq!(style.border, Some(border));
    }
}
