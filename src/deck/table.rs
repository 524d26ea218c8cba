//! Table validation and row styling.
//!
//! Styling depends only on the row index: row 0 is the header (bold, accent
//! text, header fill), every later row uses the body text color on a fill that
//! alternates with the row's parity. All cells are centered.

use super::element::{Align, RowStyle, Table};
use super::geometry::Rect;
use crate::common::{Error, Result, TableDefect};
use crate::palette::Palette;

/// Font size of every table cell, in points.
pub const TABLE_CELL_SIZE_PT: f64 = 10.0;

/// Where a table is being placed, for error reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    pub slide: usize,
    pub element: usize,
}

impl Placement {
    fn malformed(&self, defect: TableDefect) -> Error {
        Error::MalformedTable {
            slide: self.slide,
            element: self.element,
            defect,
        }
    }
}

/// Validate `cells` and build a styled table.
///
/// The palette is checked too: a palette assembled in code never went through
/// [`Palette::from_yaml_str`], and equal fills would break the row striping.
pub(crate) fn build_table(
    rect: Rect,
    cells: Vec<Vec<String>>,
    column_widths: Option<Vec<i64>>,
    palette: &Palette,
    placement: Placement,
) -> Result<Table> {
    palette.validate()?;

    let columns = match cells.first() {
        None => return Err(placement.malformed(TableDefect::Empty)),
        Some(header) if header.is_empty() => {
            return Err(placement.malformed(TableDefect::NoColumns));
        },
        Some(header) => header.len(),
    };

    if let Some((row, found)) = cells
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, row)| (index, row.len()))
        .find(|&(_, len)| len != columns)
    {
        return Err(placement.malformed(TableDefect::RaggedRow {
            row,
            expected: columns,
            found,
        }));
    }

    if let Some(widths) = &column_widths {
        if widths.len() != columns {
            return Err(placement.malformed(TableDefect::ColumnWidths {
                expected: columns,
                found: widths.len(),
            }));
        }
        if let Some(&width) = widths.iter().find(|&&w| w <= 0) {
            return Err(Error::InvalidGeometry {
                slide: Some(placement.slide),
                element: Some(placement.element),
                width,
                height: rect.height,
            });
        }
    }

    Ok(Table {
        rect,
        cells,
        column_widths,
        header: header_style(palette),
        even: body_style(palette, palette.table.even_fill),
        odd: body_style(palette, palette.table.odd_fill),
    })
}

fn header_style(palette: &Palette) -> RowStyle {
    RowStyle {
        fill: palette.table.header_fill,
        text_color: palette.accent,
        bold: true,
        align: Align::Center,
        size: TABLE_CELL_SIZE_PT,
        font: palette.font_family.clone(),
    }
}

fn body_style(palette: &Palette, fill: crate::common::RGBColor) -> RowStyle {
    RowStyle {
        fill,
        text_color: palette.body_text,
        bold: false,
        align: Align::Center,
        size: TABLE_CELL_SIZE_PT,
        font: palette.font_family.clone(),
    }
}
