//! Color type shared by every styled element.

// Submodule declarations
pub mod color;

// Re-exports
pub use color::RGBColor;
