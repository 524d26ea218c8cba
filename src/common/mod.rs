//! Common types and utilities shared by the deck model and the package writer.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result, TableDefect};
pub use style::RGBColor;
