//! PowerPoint (.pptx) output.
//!
//! - [`PptxWriter`] / [`PptxFileWriter`]: serialize a finished [`Deck`](crate::deck::Deck)
//! - [`DeckSummary`]: reopen a written package and report its contents
//! - [`template`]: the master, layout, theme and property parts shared by every package

mod reader;
pub mod template;
mod writer;

pub use reader::{DeckSummary, SlideSummary};
pub use writer::{ArtifactWriter, PptxFileWriter, PptxWriter};

#[cfg(test)]
mod tests;
