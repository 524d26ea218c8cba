//! In-memory deck model and its construction API.
//!
//! A [`Deck`] owns a fixed [`Canvas`], a [`Palette`] and an append-only list of
//! [`Slide`]s. Slides are filled through the [`SlideBuilder`] returned by
//! [`Deck::new_slide`]; once finished, the whole deck is handed to an
//! [`ArtifactWriter`] by [`Deck::finalize`].
//!
//! # Example
//!
//! ```rust
//! use deckforge::deck::{Align, Deck, ParagraphSpec, Rect};
//! use deckforge::ooxml::pptx::{DeckSummary, PptxWriter};
//! use deckforge::palette::colors;
//!
//! let mut deck = Deck::default();
//! for title in ["표지", "캐릭터", "무기"] {
//!     let mut slide = deck.new_slide();
//!     slide.fill_default_background();
//!     slide.add_text(
//!         Rect::from_inches(0.5, 0.3, 12.0, 0.5),
//!         ParagraphSpec::new(title).size(28.0).color(colors::GOLD).bold(true).align(Align::Center),
//!     )?;
//! }
//!
//! let bytes = deck.finalize(&mut PptxWriter::new())?;
//! let summary = DeckSummary::from_pptx(&bytes)?;
//! assert_eq!(summary.slide_count(), 3);
//! # Ok::<(), deckforge::Error>(())
//! ```

mod element;
mod geometry;
mod slide;
mod table;
mod text;

pub use element::{Align, Border, Element, Panel, PanelStyle, Paragraph, RowStyle, Table, TextBlock};
pub use geometry::{Canvas, Rect};
pub use slide::{Slide, SlideBuilder};
pub use table::TABLE_CELL_SIZE_PT;
pub use text::{FONT_SIZE_RANGE, MULTILINE_SIZE_PT, PARAGRAPH_SPACE_AFTER_PT, ParagraphSpec, SINGLE_LINE_SIZE_PT};

use crate::common::Result;
use crate::ooxml::pptx::{ArtifactWriter, PptxFileWriter};
use crate::palette::Palette;
use log::debug;
use std::path::{Path, PathBuf};

/// A slide deck under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    canvas: Canvas,
    palette: Palette,
    slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck with a fixed canvas and palette.
    pub fn new(canvas: Canvas, palette: Palette) -> Self {
        Self {
            canvas,
            palette,
            slides: Vec::new(),
        }
    }

    /// Append a blank slide and return the handle used to fill it.
    pub fn new_slide(&mut self) -> SlideBuilder<'_> {
        let number = self.slides.len() + 1;
        debug!("starting slide {}", number);
        self.slides.push(Slide::new(number));
        let slide = &mut self.slides[number - 1];
        SlideBuilder::new(slide, &self.palette, self.canvas)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Slides in creation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Hand the finished deck to `writer` and return what it produced.
    pub fn finalize<W: ArtifactWriter>(self, writer: &mut W) -> Result<W::Artifact> {
        debug!(
            "finalizing deck: {} slides, {} elements",
            self.slides.len(),
            self.slides.iter().map(Slide::element_count).sum::<usize>()
        );
        writer.write_deck(&self)
    }

    /// Finalize the deck as a `.pptx` file at `path`.
    ///
    /// The file appears only once the whole package has been written.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<PathBuf> {
        self.finalize(&mut PptxFileWriter::new(path))
    }
}

impl Default for Deck {
    /// Widescreen canvas with the default palette.
    fn default() -> Self {
        Self::new(Canvas::default(), Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_numbered_in_creation_order() {
        let mut deck = Deck::default();
        deck.new_slide();
        deck.new_slide().fill_default_background();
        deck.new_slide();

        let numbers: Vec<_> = deck.slides().iter().map(Slide::number).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(deck.slides()[1].background(), Some(deck.palette().background));
        assert_eq!(deck.slides()[0].background(), None);
    }

    #[test]
    fn test_custom_canvas_and_palette() {
        let mut palette = Palette::default();
        palette.card = crate::palette::colors::PURPLE;
        let deck = Deck::new(Canvas::STANDARD, palette.clone());
        assert_eq!(deck.canvas(), Canvas::STANDARD);
        assert_eq!(deck.palette(), &palette);
        assert_eq!(deck.slide_count(), 0);
    }
}
