//! Deckforge - compose styled presentation decks and write them as `.pptx`
//!
//! A deck is built slide by slide from three kinds of elements: rounded
//! panels, word-wrapped text blocks and zebra-striped tables. Colors and the
//! font come from a [`Palette`](palette::Palette), so every element of a deck
//! shares one visual identity. A finished deck is handed to an
//! [`ArtifactWriter`](ooxml::pptx::ArtifactWriter), normally the PowerPoint
//! writer.
//!
//! # Example
//!
//! ```no_run
//! use deckforge::deck::{Align, Deck, PanelStyle, ParagraphSpec, Rect};
//! use deckforge::palette::colors;
//!
//! # fn main() -> deckforge::Result<()> {
//! let mut deck = Deck::default();
//!
//! let mut slide = deck.new_slide();
//! slide.fill_default_background();
//! slide.add_text(
//!     Rect::from_inches(0.5, 0.3, 12.0, 0.6),
//!     ParagraphSpec::new("무기 목록").size(28.0).color(colors::GOLD).bold(true).align(Align::Center),
//! )?;
//! slide.add_panel(Rect::from_inches(0.5, 1.2, 12.3, 5.8), PanelStyle::default())?;
//! slide.add_table(
//!     Rect::from_inches(0.7, 1.4, 11.9, 2.0),
//!     [["이름", "공격력", "사거리"], ["부적", "12", "원거리"], ["신검", "30", "근거리"]],
//!     None,
//! )?;
//!
//! let path = deck.save("weapons.pptx")?;
//! println!("saved {}", path.display());
//! # Ok(())
//! # }
//! ```

/// Shared building blocks: errors, colors, units and XML helpers
pub mod common;

/// The deck model and the slide construction API
pub mod deck;

/// Office Open XML packaging and the PowerPoint writer
pub mod ooxml;

/// Deck colors and font, loadable from YAML
pub mod palette;

pub use common::{Error, Result};
pub use deck::{Canvas, Deck, Rect};
pub use palette::Palette;
