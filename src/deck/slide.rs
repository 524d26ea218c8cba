//! Slides and the construction handle used to fill them.
use super::element::{Element, Panel, PanelStyle, TextBlock};
use super::geometry::{Canvas, Rect};
use super::table::{Placement, build_table};
use super::text::{ParagraphSpec, TextDefaults, is_valid_font_size};
use crate::common::{Error, RGBColor, Result};
use crate::palette::Palette;
use log::{debug, trace};

/// A slide: one background and an ordered list of elements.
///
/// Slides are only created through [`Deck::new_slide`](super::Deck::new_slide)
/// and are read-only once the deck moves on to the next slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// 1-based position in the deck
    pub(crate) number: usize,
    /// Solid background; `None` keeps the blank master background
    pub(crate) background: Option<RGBColor>,
    /// Elements in drawing order
    pub(crate) elements: Vec<Element>,
}

impl Slide {
    pub(crate) fn new(number: usize) -> Self {
        Self {
            number,
            background: None,
            elements: Vec::new(),
        }
    }

    /// 1-based slide number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

/// Mutable handle to the slide most recently created by a deck.
///
/// Every placement call targets this handle's slide. The handle borrows the
/// deck, so it must be dropped before the next slide can be started.
///
/// # Examples
///
/// ```rust
/// use deckforge::deck::{Align, Deck, ParagraphSpec, PanelStyle, Rect};
/// use deckforge::palette::colors;
///
/// let mut deck = Deck::default();
/// let mut slide = deck.new_slide();
/// slide.fill_background(colors::BG_DARK);
/// slide.add_panel(Rect::from_inches(0.5, 1.0, 6.0, 5.5), PanelStyle::default())?;
/// slide.add_text(
///     Rect::from_inches(0.5, 0.3, 12.0, 0.5),
///     ParagraphSpec::new("캐릭터").size(24.0).color(colors::GOLD).bold(true),
/// )?;
/// slide.add_multiline(
///     Rect::from_inches(0.7, 1.2, 5.6, 5.0),
///     [
///         ParagraphSpec::new("퇴마사").size(16.0).bold(true).align(Align::Left),
///         ParagraphSpec::new("HP 150 / 속도 2.5"),
///     ],
/// )?;
/// slide.add_table(
///     Rect::from_inches(6.8, 1.0, 6.0, 2.0),
///     [["이름", "HP"], ["퇴마사", "150"]],
///     None,
/// )?;
/// assert_eq!(slide.slide().element_count(), 4);
/// # Ok::<(), deckforge::Error>(())
/// ```
#[derive(Debug)]
pub struct SlideBuilder<'a> {
    slide: &'a mut Slide,
    palette: &'a Palette,
    canvas: Canvas,
}

impl<'a> SlideBuilder<'a> {
    pub(crate) fn new(slide: &'a mut Slide, palette: &'a Palette, canvas: Canvas) -> Self {
        Self {
            slide,
            palette,
            canvas,
        }
    }

    /// The slide being built.
    pub fn slide(&self) -> &Slide {
        self.slide
    }

    /// The deck palette, for looking up named colors while building.
    pub fn palette(&self) -> &Palette {
        self.palette
    }

    /// The deck canvas, for elements sized to the full slide.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Set the solid background color. The last call wins.
    pub fn fill_background(&mut self, color: RGBColor) -> &mut Self {
        self.slide.background = Some(color);
        self
    }

    /// Fill the background with the palette's background color.
    pub fn fill_default_background(&mut self) -> &mut Self {
        let color = self.palette.background;
        self.fill_background(color)
    }

    /// Append a rounded-rectangle panel.
    ///
    /// The fill defaults to the palette's card color. Without a border the panel
    /// is drawn with no outline at all. A border width outside
    /// `0..=Border::MAX_WIDTH` is rejected as invalid geometry.
    pub fn add_panel(&mut self, rect: Rect, style: PanelStyle) -> Result<()> {
        self.check_geometry(rect)?;
        if let Some(border) = style.border.filter(|border| !border.has_valid_width()) {
            return Err(Error::InvalidGeometry {
                slide: Some(self.slide.number),
                element: Some(self.slide.elements.len()),
                width: border.width.unwrap_or_default(),
                height: rect.height,
            });
        }
        let panel = Panel {
            rect,
            fill: style.fill.unwrap_or(self.palette.card),
            border: style.border,
        };
        self.push(Element::Panel(panel));
        Ok(())
    }

    /// Append a word-wrapped text box holding a single paragraph.
    pub fn add_text(&mut self, rect: Rect, paragraph: impl Into<ParagraphSpec>) -> Result<()> {
        self.check_geometry(rect)?;
        let paragraph = paragraph
            .into()
            .resolve(&TextDefaults::single_line(self.palette));
        self.check_font_size(paragraph.size)?;
        self.push(Element::TextBlock(TextBlock {
            rect,
            paragraphs: vec![paragraph],
        }));
        Ok(())
    }

    /// Append a word-wrapped text box with one paragraph per line, in order.
    ///
    /// Each line keeps its own size, color, weight and alignment; empty lines
    /// become vertical spacing.
    pub fn add_multiline<I>(&mut self, rect: Rect, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<ParagraphSpec>,
    {
        self.check_geometry(rect)?;
        let defaults = TextDefaults::multiline(self.palette);
        let paragraphs = lines
            .into_iter()
            .map(|line| line.into().resolve(&defaults))
            .collect::<Vec<_>>();
        for paragraph in &paragraphs {
            self.check_font_size(paragraph.size)?;
        }
        self.push(Element::TextBlock(TextBlock { rect, paragraphs }));
        Ok(())
    }

    /// Append a table. Row 0 is the header; every row must have its length.
    ///
    /// `column_widths`, when given, must hold one positive width per column;
    /// otherwise the columns share the table width evenly.
    pub fn add_table<R, C>(
        &mut self,
        rect: Rect,
        rows: R,
        column_widths: Option<Vec<i64>>,
    ) -> Result<()>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: ToString,
    {
        self.check_geometry(rect)?;
        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect::<Vec<Vec<String>>>();
        let table = build_table(rect, cells, column_widths, self.palette, self.placement())?;
        self.push(Element::Table(table));
        Ok(())
    }

    fn placement(&self) -> Placement {
        Placement {
            slide: self.slide.number,
            element: self.slide.elements.len(),
        }
    }

    fn check_geometry(&self, rect: Rect) -> Result<()> {
        if !rect.has_area() {
            return Err(Error::InvalidGeometry {
                slide: Some(self.slide.number),
                element: Some(self.slide.elements.len()),
                width: rect.width,
                height: rect.height,
            });
        }
        if !rect.fits(&self.canvas) {
            debug!(
                "slide {} element {} extends past the canvas: {:?}",
                self.slide.number,
                self.slide.elements.len(),
                rect
            );
        }
        Ok(())
    }

    fn check_font_size(&self, size: f64) -> Result<()> {
        if is_valid_font_size(size) {
            Ok(())
        } else {
            Err(Error::InvalidFontSize {
                slide: self.slide.number,
                element: self.slide.elements.len(),
                size,
            })
        }
    }

    fn push(&mut self, element: Element) {
        trace!(
            "slide {}: appending {} #{}",
            self.slide.number,
            element.kind(),
            self.slide.elements.len()
        );
        self.slide.elements.push(element);
    }
}
