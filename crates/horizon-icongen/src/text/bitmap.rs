//! Built-in fixed-size bitmap font.
//!
//! Used when no scalable font file is available. Glyphs come from the
//! `font8x8` tables: one byte per row, least significant bit leftmost.

use font8x8::{BASIC_FONTS, UnicodeFonts};

use super::mask::TextMask;
use crate::error::{IconError, IconResult};

/// Cell size of every glyph in pixels.
pub const BITMAP_GLYPH_SIZE: u32 = 8;

/// The built-in 8x8 bitmap font. Not resizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitmapFont;

impl BitmapFont {
    /// The built-in font.
    pub const fn builtin() -> Self {
        Self
    }

    /// Load the built-in font, checking it can render every char of `label`.
    pub fn load_for(label: &str) -> IconResult<Self> {
        let font = Self::builtin();
        if let Some(missing) = label.chars().find(|&c| !font.has_glyph(c)) {
            return Err(IconError::MissingGlyph(missing));
        }
        Ok(font)
    }

    /// Whether the font has a glyph for `c`.
    pub fn has_glyph(&self, c: char) -> bool {
        BASIC_FONTS.get(c).is_some()
    }

    /// Rasterize `text` left to right starting at the origin.
    ///
    /// Characters without a glyph advance the pen but draw nothing.
    pub fn rasterize(&self, text: &str) -> TextMask {
        let chars = text.chars().count() as u32;
        let mut mask = TextMask::new(chars * BITMAP_GLYPH_SIZE, BITMAP_GLYPH_SIZE);

        for (index, c) in text.chars().enumerate() {
            let Some(rows) = BASIC_FONTS.get(c) else {
                continue;
            };
            let pen_x = index as i32 * BITMAP_GLYPH_SIZE as i32;
            for (y, row) in rows.iter().enumerate() {
                for x in 0..BITMAP_GLYPH_SIZE {
                    if row & (1u8 << x) != 0 {
                        mask.push(pen_x + x as i32, y as i32, 255);
                    }
                }
            }
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_default_label() {
        assert!(BitmapFont::load_for("C+").is_ok());
    }

    #[test]
    fn rejects_uncovered_characters() {
        let err = BitmapFont::load_for("C\u{1F600}").unwrap_err();
        assert!(matches!(err, IconError::MissingGlyph('\u{1F600}')));
    }

    #[test]
    fn rasterize_places_glyphs_in_cells() {
        let font = BitmapFont::builtin();
        let mask = font.rasterize("C+");
        assert!(!mask.is_empty());

        let bounds = mask.bounds().unwrap();
        assert!(bounds.left >= 0);
        assert!(bounds.right <= 16);
        assert!(bounds.top >= 0);
        assert!(bounds.bottom <= 8);
        // '+' lives in the second cell
        assert!(mask.pixels().iter().any(|p| p.x >= 8));
        assert_eq!(mask.advance_bounds().width(), 16);
    }

    #[test]
    fn whitespace_has_advance_but_no_ink() {
        let mask = BitmapFont::builtin().rasterize("  ");
        assert!(mask.bounds().is_none());
        assert_eq!(mask.advance_bounds().width(), 16);
        assert_eq!(mask.advance_bounds().height(), 8);
    }
}
