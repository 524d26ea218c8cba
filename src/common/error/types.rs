use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deckforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A table's rows could not form a rectangular grid.
    ///
    /// `slide` is the 1-based slide number, `element` the position the table
    /// would have taken in that slide's element list.
    #[error("malformed table on slide {slide}, element {element}: {defect}")]
    MalformedTable {
        slide: usize,
        element: usize,
        defect: TableDefect,
    },

    /// A placement with a non-positive width or height.
    ///
    /// Canvas-level checks carry no slide or element.
    #[error("invalid geometry{}: width {width} and height {height} must be positive", location(*slide, *element))]
    InvalidGeometry {
        slide: Option<usize>,
        element: Option<usize>,
        width: i64,
        height: i64,
    },

    /// A paragraph or cell font size that is not a positive, finite number.
    #[error("invalid font size on slide {slide}, element {element}: {size}")]
    InvalidFontSize {
        slide: usize,
        element: usize,
        size: f64,
    },

    /// The finished package could not be persisted.
    #[error("failed to write artifact {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Palette configuration could not be parsed or serialized
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The reason a table was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableDefect {
    /// No rows at all.
    #[error("table has no rows")]
    Empty,

    /// The header row has no cells.
    #[error("header row has no columns")]
    NoColumns,

    /// A body row whose length differs from the header row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Explicit column widths that do not match the column count.
    #[error("{found} column widths given for {expected} columns")]
    ColumnWidths { expected: usize, found: usize },
}

fn location(slide: Option<usize>, element: Option<usize>) -> String {
    match (slide, element) {
        (Some(slide), Some(element)) => format!(" on slide {}, element {}", slide, element),
        (Some(slide), None) => format!(" on slide {}", slide),
        _ => String::new(),
    }
}

/// Result type for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;
