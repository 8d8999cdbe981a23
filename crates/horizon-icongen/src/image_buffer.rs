//! CPU-side RGBA pixel buffer for icon rendering.
//!
//! This module provides [`ImageBuffer`], a thin wrapper around
//! `image::RgbaImage` with the handful of operations the icon renderer needs:
//! solid fills, coverage-weighted compositing and PNG export.
//!
//! # Example
//!
//! ```no_run
//! use horizon_icongen::{Color, ImageBuffer};
//!
//! let mut image = ImageBuffer::from_color(48, 48, Color::WHITE);
//! image.blend_pixel(10, 10, Color::BLACK, 128);
//! image.save_png("icons/icon48.png")?;
//! # Ok::<(), horizon_icongen::IconError>(())
//! ```

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{IconError, IconResult};
use crate::types::Color;

/// A CPU-side RGBA8 image buffer.
#[derive(Clone)]
pub struct ImageBuffer {
    inner: RgbaImage,
}

impl ImageBuffer {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create an image filled with a solid color.
    pub fn from_color(width: u32, height: u32, color: Color) -> Self {
        Self {
            inner: RgbaImage::from_pixel(width, height, color.to_rgba8()),
        }
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the dimensions as a (width, height) tuple.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Get the raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_rgba8_bytes(&self) -> &[u8] {
        self.inner.as_raw()
    }

    // ========================================================================
    // PIXEL ACCESS
    // ========================================================================

    /// Get the stored pixel at (x, y), or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.inner.get_pixel_checked(x, y).copied()
    }

    /// Composite `color` over the pixel at (x, y) with the given coverage.
    ///
    /// Coverage scales the source alpha (0 = untouched, 255 = full). Pixels
    /// outside the image are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let Some(dst) = self.inner.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };

        let src = color.to_rgba8();
        let sa = (src[3] as f32 / 255.0) * (coverage as f32 / 255.0);
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            *dst = Rgba([0, 0, 0, 0]);
            return;
        }

        let mix = |s: u8, d: u8| {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        *dst = Rgba([
            mix(src[0], dst[0]),
            mix(src[1], dst[1]),
            mix(src[2], dst[2]),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]);
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// Save the image as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> IconResult<()> {
        let path = path.as_ref();
        self.inner
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| IconError::ImageSave {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Encode the image as PNG bytes.
    pub fn to_png(&self) -> IconResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.inner
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|source| IconError::ImageSave {
                path: "<memory>".into(),
                source,
            })?;
        Ok(buffer.into_inner())
    }
}

impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
