//! Style palette shared by every slide of a deck.
//!
//! The palette maps semantic roles (card background, accent, body text, table
//! fills) to colors and names the font family applied to all text. It is a plain
//! value handed to [`Deck::new`](crate::deck::Deck::new), so decks with different
//! palettes can coexist.
//!
//! Palettes can be loaded from YAML. Every field is optional; omitted fields keep
//! their default value:
//!
//! ```yaml
//! font_family: Noto Sans KR
//! accent: "#FF8C28"
//! table:
//!   header_fill: "#202020"
//! colors:
//!   teal: "#008080"
//! ```

use crate::common::{Error, RGBColor, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Fixed named colors of the default palette.
pub mod colors {
    use crate::common::RGBColor;

    pub const BG_DARK: RGBColor = RGBColor::new(26, 10, 10);
    pub const BG_CARD: RGBColor = RGBColor::new(42, 28, 20);
    pub const GOLD: RGBColor = RGBColor::new(255, 215, 0);
    pub const RED: RGBColor = RGBColor::new(221, 68, 68);
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const LIGHT_GRAY: RGBColor = RGBColor::new(200, 200, 200);
    pub const MED_GRAY: RGBColor = RGBColor::new(150, 150, 150);
    pub const DIM_GRAY: RGBColor = RGBColor::new(100, 100, 100);
    pub const GREEN: RGBColor = RGBColor::new(68, 221, 68);
    pub const BLUE: RGBColor = RGBColor::new(100, 180, 255);
    pub const ORANGE: RGBColor = RGBColor::new(255, 140, 40);
    pub const PURPLE: RGBColor = RGBColor::new(170, 100, 255);
    pub const CYAN: RGBColor = RGBColor::new(130, 220, 255);

    pub const TABLE_HEADER: RGBColor = RGBColor::new(50, 30, 20);
    pub const TABLE_EVEN: RGBColor = RGBColor::new(35, 25, 18);
    pub const TABLE_ODD: RGBColor = RGBColor::new(45, 30, 22);

    /// Every named color with its lookup key.
    pub const NAMED: [(&str, RGBColor); 13] = [
        ("bg_dark", BG_DARK),
        ("bg_card", BG_CARD),
        ("gold", GOLD),
        ("red", RED),
        ("white", WHITE),
        ("light_gray", LIGHT_GRAY),
        ("med_gray", MED_GRAY),
        ("dim_gray", DIM_GRAY),
        ("green", GREEN),
        ("blue", BLUE),
        ("orange", ORANGE),
        ("purple", PURPLE),
        ("cyan", CYAN),
    ];
}

/// Font family applied to text unless a paragraph overrides it.
pub const DEFAULT_FONT_FAMILY: &str = "맑은 고딕";

/// Semantic colors and font defaults for a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Font family for every paragraph and table cell.
    pub font_family: String,
    /// Slide background used by `fill_default_background`.
    pub background: RGBColor,
    /// Panel fill when none is given.
    pub card: RGBColor,
    /// Accent color, used for table header text.
    pub accent: RGBColor,
    /// Default color of single-paragraph text.
    pub text: RGBColor,
    /// Default color of multi-paragraph text and table body cells.
    pub body_text: RGBColor,
    /// Table cell fills.
    pub table: TablePalette,
    /// Additional colors addressable by name.
    pub colors: BTreeMap<String, RGBColor>,
}

/// Fills for the header row and the two alternating body row shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablePalette {
    pub header_fill: RGBColor,
    pub even_fill: RGBColor,
    pub odd_fill: RGBColor,
}

impl TablePalette {
    /// Check that the header and both body shades are pairwise distinct, so
    /// that adjacent rows never share a fill.
    pub fn validate(&self) -> Result<()> {
        if self.even_fill == self.odd_fill {
            return Err(Error::InvalidPalette(format!(
                "table even_fill and odd_fill are both {}",
                self.even_fill
            )));
        }
        if self.header_fill == self.even_fill || self.header_fill == self.odd_fill {
            return Err(Error::InvalidPalette(format!(
                "table header_fill {} matches a body row fill",
                self.header_fill
            )));
        }
        Ok(())
    }
}

impl Default for TablePalette {
    fn default() -> Self {
        Self {
            header_fill: colors::TABLE_HEADER,
            even_fill: colors::TABLE_EVEN,
            odd_fill: colors::TABLE_ODD,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            background: colors::BG_DARK,
            card: colors::BG_CARD,
            accent: colors::GOLD,
            text: colors::WHITE,
            body_text: colors::LIGHT_GRAY,
            table: TablePalette::default(),
            colors: colors::NAMED
                .iter()
                .map(|(name, color)| (name.to_string(), *color))
                .collect(),
        }
    }
}

impl Palette {
    /// Look up a named color.
    ///
    /// ```
    /// use deckforge::palette::{colors, Palette};
    /// assert_eq!(Palette::default().color("gold"), Some(colors::GOLD));
    /// assert_eq!(Palette::default().color("mauve"), None);
    /// ```
    pub fn color(&self, name: &str) -> Option<RGBColor> {
        self.colors.get(name).copied()
    }

    /// Reject palettes that cannot style a table: see [`TablePalette::validate`].
    pub fn validate(&self) -> Result<()> {
        self.table.validate()
    }

    /// Parse a palette from YAML; omitted fields keep their defaults.
    ///
    /// The result is validated, so a palette loaded here is always usable.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let palette: Self =
            serde_saphyr::from_str(yaml).map_err(|e| Error::InvalidPalette(e.to_string()))?;
        palette.validate()?;
        Ok(palette)
    }

    /// Load a palette from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize the palette to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::InvalidPalette(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roles() {
        let palette = Palette::default();
        assert_eq!(palette.font_family, "맑은 고딕");
        assert_eq!(palette.card, colors::BG_CARD);
        assert_eq!(palette.body_text, colors::LIGHT_GRAY);
        assert_eq!(palette.colors.len(), colors::NAMED.len());
        assert_eq!(palette.color("cyan"), Some(colors::CYAN));
    }

    #[test]
    fn test_partial_yaml_override() {
        let yaml = "font_family: Noto Sans KR\naccent: \"#FF8C28\"\ntable:\n  header_fill: \"#202020\"\n";
        let palette = Palette::from_yaml_str(yaml).unwrap();

        assert_eq!(palette.font_family, "Noto Sans KR");
        assert_eq!(palette.accent, colors::ORANGE);
        assert_eq!(palette.table.header_fill, RGBColor::new(0x20, 0x20, 0x20));
        // untouched fields keep defaults
        assert_eq!(palette.table.even_fill, colors::TABLE_EVEN);
        assert_eq!(palette.background, colors::BG_DARK);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut palette = Palette::default();
        palette.colors.insert("teal".to_string(), RGBColor::new(0, 128, 128));

        let yaml = palette.to_yaml().unwrap();
        let parsed = Palette::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, palette);
    }

    #[test]
    fn test_zebra_fills_must_differ() {
        assert!(Palette::default().validate().is_ok());

        let yaml = "table:\n  even_fill: \"#2D1E16\"\n  odd_fill: \"#2D1E16\"\n";
        let err = Palette::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(&err, Error::InvalidPalette(msg) if msg.contains("#2D1E16")));

        let yaml = format!("table:\n  header_fill: \"{}\"\n", colors::TABLE_ODD);
        assert!(matches!(Palette::from_yaml_str(&yaml), Err(Error::InvalidPalette(_))));

        let mut palette = Palette::default();
        palette.table.header_fill = palette.table.even_fill;
        assert!(palette.validate().is_err());
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"table:\n  odd_fill: \"#3C2A1E\"\n  even_fill: \"#3C2A1E\"\n")
            .unwrap();
        assert!(matches!(Palette::load(file.path()), Err(Error::InvalidPalette(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Palette::from_yaml_str("accent: \"#12\"\n"),
            Err(Error::InvalidPalette(_))
        ));
        assert!(matches!(
            Palette::from_yaml_str("shadow: \"#000000\"\n"),
            Err(Error::InvalidPalette(_))
        ));
    }
}
