//! Rasterized text coverage and its bounding box.

use crate::types::Point;

/// A single covered pixel of a rasterized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveragePixel {
    /// X offset from the draw origin.
    pub x: i32,
    /// Y offset from the draw origin.
    pub y: i32,
    /// Coverage (0 = none, 255 = full).
    pub coverage: u8,
}

/// Bounding box of rendered text, relative to the draw origin.
///
/// `right` and `bottom` are exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    /// Create a bounding box from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Draw origin that centers this box on a `canvas x canvas` square.
    ///
    /// The vertical position is shifted by `top` so the ink, not the line
    /// box, ends up centered.
    pub fn centered_origin(&self, canvas: u32) -> Point {
        let canvas = canvas as f32;
        let x = (canvas - self.width() as f32) / 2.0;
        let y = (canvas - self.height() as f32) / 2.0 - self.top as f32;
        Point::new(x.floor() as i32, y.floor() as i32)
    }
}

/// Coverage mask of a rasterized label.
#[derive(Debug, Clone, Default)]
pub struct TextMask {
    pixels: Vec<CoveragePixel>,
    advance_width: u32,
    advance_height: u32,
}

impl TextMask {
    /// Create an empty mask with the given layout advance.
    pub fn new(advance_width: u32, advance_height: u32) -> Self {
        Self {
            pixels: Vec::new(),
            advance_width,
            advance_height,
        }
    }

    /// Record coverage at an offset from the draw origin.
    pub fn push(&mut self, x: i32, y: i32, coverage: u8) {
        if coverage > 0 {
            self.pixels.push(CoveragePixel { x, y, coverage });
        }
    }

    /// The covered pixels.
    pub fn pixels(&self) -> &[CoveragePixel] {
        &self.pixels
    }

    /// Whether no pixel carries ink.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Exact ink bounding box, or `None` when nothing was rasterized.
    pub fn bounds(&self) -> Option<TextBounds> {
        let first = self.pixels.first()?;
        let mut bounds = TextBounds::new(first.x, first.y, first.x + 1, first.y + 1);
        for p in &self.pixels[1..] {
            bounds.left = bounds.left.min(p.x);
            bounds.top = bounds.top.min(p.y);
            bounds.right = bounds.right.max(p.x + 1);
            bounds.bottom = bounds.bottom.max(p.y + 1);
        }
        Some(bounds)
    }

    /// Coarse box spanning the layout advance from the origin.
    pub fn advance_bounds(&self) -> TextBounds {
        TextBounds::new(0, 0, self.advance_width as i32, self.advance_height as i32)
    }
}
