//! Open Packaging Conventions (OPC) writing support.
//!
//! A presentation package is a ZIP archive of parts, each with a content type,
//! plus relationship members linking the parts together. This module knows how
//! to lay those out; it knows nothing about slides.

pub mod constants;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use pkgwriter::{PackageWriter, Part};
pub use rel::{Relationship, Relationships};
