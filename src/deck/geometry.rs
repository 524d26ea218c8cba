//! Placement rectangles and the deck canvas.

use crate::common::unit::inches;
use crate::common::{Error, Result};

/// Absolute placement of an element, in EMUs from the canvas top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from inch measurements.
    ///
    /// ```
    /// use deckforge::deck::Rect;
    /// let rect = Rect::from_inches(0.5, 1.0, 12.0, 0.5);
    /// assert_eq!(rect.x, 457_200);
    /// assert_eq!(rect.width, 10_972_800);
    /// ```
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }

    /// Whether both dimensions are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether the rectangle lies entirely on `canvas`.
    pub fn fits(&self, canvas: &Canvas) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x.saturating_add(self.width) <= canvas.width
            && self.y.saturating_add(self.height) <= canvas.height
    }
}

/// Fixed slide size shared by every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Canvas {
    /// 16:9, 13.333" x 7.5".
    pub const WIDESCREEN: Canvas = Canvas {
        width: 12_192_000,
        height: 6_858_000,
    };

    /// 4:3, 10" x 7.5".
    pub const STANDARD: Canvas = Canvas {
        width: 9_144_000,
        height: 6_858_000,
    };

    /// Create a canvas; both dimensions must be positive.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidGeometry {
                slide: None,
                element: None,
                width,
                height,
            });
        }
        Ok(Self { width, height })
    }

    /// The whole canvas as a rectangle, handy for full-bleed elements.
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}
