//! Error types for deck construction and serialization.
//!
//! Construction errors ([`Error::MalformedTable`], [`Error::InvalidGeometry`],
//! [`Error::InvalidFontSize`]) are raised by the call that caused them and leave
//! the slide usable. Serialization errors are fatal to the run.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result, TableDefect};
