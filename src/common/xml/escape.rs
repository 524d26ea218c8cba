//! Escaping for attribute values and slide text runs.
//!
//! Attribute values only need the five predefined entities. Run text can hold
//! anything a user typed or pasted, so it also gets the OOXML `_xHHHH_` form for
//! characters XML 1.0 cannot carry, and line breaks are split out before the
//! text reaches a run.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" and not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Characters that end a line inside one paragraph. PowerPoint uses vertical
/// tab for a soft break when text is copied out of a text box.
const LINE_BREAKS: [char; 2] = ['\n', '\u{0B}'];

/// Escape XML special characters in attribute values.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::escape_xml;
/// assert_eq!(escape_xml("HP < 150 & MP"), "HP &lt; 150 &amp; MP");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;b&gt; &amp;lt;"), "<b> &lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Split paragraph text into the lines written between `a:br` elements.
///
/// Both `\n` and vertical tab break a line. Empty lines are kept so that
/// consecutive breaks survive.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::split_run_lines;
/// let lines: Vec<_> = split_run_lines("HP\u{0B}150\n\nMP").collect();
/// assert_eq!(lines, ["HP", "150", "", "MP"]);
/// ```
pub fn split_run_lines(s: &str) -> impl Iterator<Item = &str> {
    s.split(LINE_BREAKS)
}

/// Whether XML 1.0 forbids `c` in character data, or a parser would not
/// return it unchanged.
///
/// Tab and line feed pass through. Carriage return is legal but normalized to
/// a line feed on read, so it is escaped like the forbidden C0 controls.
fn needs_hex_escape(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Whether `s` starts with a complete `xHHHH_` tail of an `_xHHHH_` escape.
fn hex_escape_tail(s: &str) -> Option<char> {
    let tail = s.strip_prefix('x')?;
    let digits = tail.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) || !tail[4..].starts_with('_') {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// Escape one line of run text for an `a:t` element.
///
/// On top of the predefined entities, control characters become `_xHHHH_`.
/// An underscore that would otherwise be read as the start of such an escape
/// is written as `_x005F_`. Line breaks must be split off with
/// [`split_run_lines`] first; any that remain are escaped like other controls.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::escape_run_text;
/// assert_eq!(escape_run_text("벨\u{07} & 종"), "벨_x0007_ &amp; 종");
/// assert_eq!(escape_run_text("a_x0041_"), "a_x005F_x0041_");
/// assert_eq!(escape_run_text("snake_case"), "snake_case");
/// ```
pub fn escape_run_text(s: &str) -> String {
    let escaped = escape_xml(s);
    if !escaped.contains(needs_hex_escape) && !escaped.contains("_x") {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for (index, c) in escaped.char_indices() {
        if needs_hex_escape(c) || (c == '_' && hex_escape_tail(&escaped[index + 1..]).is_some()) {
            out.push_str(&format!("_x{:04X}_", u32::from(c)));
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode the text of an `a:t` element: predefined entities first, then
/// `_xHHHH_` escapes. Malformed escapes are left as they are.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::unescape_run_text;
/// assert_eq!(unescape_run_text("벨_x0007_ &amp; 종"), "벨\u{07} & 종");
/// assert_eq!(unescape_run_text("a_x005F_x0041_"), "a_x0041_");
/// assert_eq!(unescape_run_text("_xZZZZ_"), "_xZZZZ_");
/// ```
pub fn unescape_run_text(s: &str) -> String {
    let text = unescape_xml(s);
    if !text.contains("_x") {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();
    while let Some(pos) = rest.find('_') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match hex_escape_tail(after) {
            Some(c) => {
                out.push(c);
                // "xHHHH_" is six ASCII bytes
                rest = &after[6..];
            },
            None => {
                out.push('_');
                rest = after;
            },
        }
    }
    out.push_str(rest);
    out
}
