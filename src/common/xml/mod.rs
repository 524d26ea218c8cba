//! XML text helpers.

mod escape;

pub use escape::{escape_run_text, escape_xml, split_run_lines, unescape_run_text, unescape_xml};
