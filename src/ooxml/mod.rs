//! Office Open XML (OOXML) output.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package parts, relationships, content types and
//!    the ZIP container
//! 2. **PresentationML** (`pptx`): slide, shape and table markup, the fixed
//!    template parts, and a read-back summary of written packages
pub mod opc;
pub mod pptx;
