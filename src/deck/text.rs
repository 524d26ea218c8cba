//! Paragraph specifications and their defaults.
//!
//! A [`ParagraphSpec`] names only what a call site cares about; everything left
//! as `None` is filled in from [`TextDefaults`] when the paragraph is placed.
//!
//! | field  | `add_text`      | `add_multiline`        |
//! |--------|-----------------|------------------------|
//! | size   | 14 pt           | 13 pt                  |
//! | color  | `palette.text`  | `palette.body_text`    |
//! | bold   | false           | false                  |
//! | align  | left            | left                   |
//! | font   | `palette.font_family` | `palette.font_family` |
//!
//! Multi-paragraph blocks also leave 2 pt of space after each paragraph.

use super::element::{Align, Paragraph};
use crate::common::RGBColor;
use crate::palette::Palette;
use std::ops::RangeInclusive;

/// Default font size of single-paragraph text, in points.
pub const SINGLE_LINE_SIZE_PT: f64 = 14.0;
/// Default font size of multi-paragraph text, in points.
pub const MULTILINE_SIZE_PT: f64 = 13.0;
/// Space after each paragraph of a multi-paragraph block, in points.
pub const PARAGRAPH_SPACE_AFTER_PT: f64 = 2.0;

/// One line of text with optional styling overrides.
///
/// ```
/// use deckforge::deck::{Align, ParagraphSpec};
/// use deckforge::palette::colors::GOLD;
///
/// let heading = ParagraphSpec::new("퇴마록").size(36.0).color(GOLD).bold(true).align(Align::Center);
/// let body: ParagraphSpec = "plain body line".into();
/// assert_eq!(heading.size, Some(36.0));
/// assert_eq!(body.size, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphSpec {
    pub text: String,
    pub size: Option<f64>,
    pub color: Option<RGBColor>,
    pub bold: Option<bool>,
    pub align: Option<Align>,
    pub font: Option<String>,
}

impl ParagraphSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// An empty line, rendered as vertical spacing of the given height.
    pub fn spacer(size: f64) -> Self {
        Self::new("").size(size)
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub(crate) fn resolve(self, defaults: &TextDefaults<'_>) -> Paragraph {
        Paragraph {
            text: self.text,
            size: self.size.unwrap_or(defaults.size),
            color: self.color.unwrap_or(defaults.color),
            bold: self.bold.unwrap_or(false),
            align: self.align.unwrap_or_default(),
            font: self.font.unwrap_or_else(|| defaults.font.to_string()),
            space_after: defaults.space_after,
        }
    }
}

impl From<&str> for ParagraphSpec {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ParagraphSpec {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Fallback values applied to unspecified paragraph fields.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextDefaults<'a> {
    pub size: f64,
    pub color: RGBColor,
    pub font: &'a str,
    pub space_after: Option<f64>,
}

impl<'a> TextDefaults<'a> {
    pub fn single_line(palette: &'a Palette) -> Self {
        Self {
            size: SINGLE_LINE_SIZE_PT,
            color: palette.text,
            font: &palette.font_family,
            space_after: None,
        }
    }

    pub fn multiline(palette: &'a Palette) -> Self {
        Self {
            size: MULTILINE_SIZE_PT,
            color: palette.body_text,
            font: &palette.font_family,
            space_after: Some(PARAGRAPH_SPACE_AFTER_PT),
        }
    }
}

/// Font sizes a run can carry, in points.
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 1.0..=4000.0;

/// Whether `size` can be written as a font size. NaN fails the range check.
pub(crate) fn is_valid_font_size(size: f64) -> bool {
    FONT_SIZE_RANGE.contains(&size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::colors;

    #[test]
    fn test_multiline_defaults() {
        let palette = Palette::default();
        let paragraph = ParagraphSpec::new("body text")
            .size(12.0)
            .resolve(&TextDefaults::multiline(&palette));

        assert_eq!(paragraph.size, 12.0);
        assert_eq!(paragraph.color, colors::LIGHT_GRAY);
        assert!(!paragraph.bold);
        assert_eq!(paragraph.align, Align::Left);
        assert_eq!(paragraph.font, "맑은 고딕");
        assert_eq!(paragraph.space_after, Some(2.0));
    }

    #[test]
    fn test_single_line_defaults() {
        let palette = Palette::default();
        let paragraph = ParagraphSpec::from("Title").resolve(&TextDefaults::single_line(&palette));

        assert_eq!(paragraph.size, 14.0);
        assert_eq!(paragraph.color, colors::WHITE);
        assert_eq!(paragraph.space_after, None);
    }

    #[test]
    fn test_overrides_win() {
        let palette = Palette::default();
        let paragraph = ParagraphSpec::new("x")
            .color(colors::RED)
            .bold(true)
            .align(Align::Right)
            .font("Arial")
            .resolve(&TextDefaults::multiline(&palette));

        assert_eq!(paragraph.color, colors::RED);
        assert!(paragraph.bold);
        assert_eq!(paragraph.align, Align::Right);
        assert_eq!(paragraph.font, "Arial");
    }

    #[test]
    fn test_font_size_validation() {
        assert!(is_valid_font_size(10.5));
        assert!(!is_valid_font_size(0.0));
        assert!(!is_valid_font_size(-3.0));
        assert!(!is_valid_font_size(f64::NAN));
        assert!(!is_valid_font_size(f64::INFINITY));
        assert!(is_valid_font_size(1.0));
        assert!(is_valid_font_size(4000.0));
        assert!(!is_valid_font_size(0.5));
        assert!(!is_valid_font_size(4000.5));
    }
}
