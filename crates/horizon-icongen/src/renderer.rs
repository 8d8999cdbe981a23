//! Per-icon rendering.
//!
//! Each icon is a solid square with the label composited at its center.
//! Text is best effort: if the label cannot be rasterized or drawn the icon
//! is still produced as a plain square.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::{IconSpec, IconStyle};
use crate::error::{IconError, IconResult};
use crate::image_buffer::ImageBuffer;
use crate::logging::targets;
use crate::text::{FontHandle, SizedFont, TextBounds, font_pixel_size};
use crate::types::Point;

/// Render `icon` in memory as a square of `icon.size` pixels.
///
/// Only a zero size is an error; label problems are logged against the
/// icon's file name and skipped.
pub fn render_icon(icon: &IconSpec, font: Option<&FontHandle>, style: &IconStyle) -> IconResult<ImageBuffer> {
    let size = icon.size;
    if size == 0 {
        return Err(IconError::InvalidDimensions {
            width: size,
            height: size,
        });
    }

    let mut image = ImageBuffer::from_color(size, size, style.background);

    let Some(handle) = font else {
        debug!(target: targets::RENDERER, file = icon.filename, "No usable font, rendering solid icon");
        return Ok(image);
    };

    let mut sized = handle.at_size(font_pixel_size(size, style.font_size_ratio));
    match draw_label(&mut image, &mut sized, style) {
        Ok(origin) => {
            debug!(target: targets::RENDERER, size, x = origin.x, y = origin.y, "Label origin");
            info!(target: targets::RENDERER, "Drew text '{}' on {}", style.label, icon.filename);
        }
        Err(e) => error!(
            target: targets::RENDERER,
            "Could not draw text on {}. Error: {e}. Icon will be solid color.",
            icon.filename
        ),
    }

    Ok(image)
}

/// Composite the label centered on `image`, returning the draw origin.
pub fn draw_label(image: &mut ImageBuffer, font: &mut SizedFont, style: &IconStyle) -> IconResult<Point> {
    let mask = font.rasterize(&style.label)?;
    let bounds = label_bounds(mask.bounds(), mask.advance_bounds())?;
    let origin = bounds.centered_origin(image.width());

    for pixel in mask.pixels() {
        image.blend_pixel(
            origin.x + pixel.x,
            origin.y + pixel.y,
            style.foreground,
            pixel.coverage,
        );
    }

    Ok(origin)
}

/// Prefer the exact ink box; fall back to the layout advance when there is no ink.
fn label_bounds(ink: Option<TextBounds>, advance: TextBounds) -> IconResult<TextBounds> {
    if let Some(bounds) = ink {
        return Ok(bounds);
    }
    debug!(target: targets::RENDERER, "No ink box for label, using advance measurement");
    if advance.width() <= 0 || advance.height() <= 0 {
        return Err(IconError::TextMeasurement("label has no extent".to_string()));
    }
    Ok(advance)
}

/// Render `icon` and write it under `output_dir`.
pub fn write_icon(
    icon: &IconSpec,
    output_dir: &Path,
    font: Option<&FontHandle>,
    style: &IconStyle,
) -> IconResult<PathBuf> {
    let image = render_icon(icon, font, style)?;
    let path = output_dir.join(icon.filename);
    image.save_png(&path)?;
    Ok(path)
}

/// Render and write one icon, logging instead of propagating failures.
///
/// Returns the written path, or `None` if the icon was skipped.
pub fn create_icon(
    icon: &IconSpec,
    output_dir: &Path,
    font: Option<&FontHandle>,
    style: &IconStyle,
) -> Option<PathBuf> {
    match write_icon(icon, output_dir, font, style) {
        Ok(path) => {
            info!(target: targets::RENDERER, "Successfully created icon: {}", icon.filename);
            Some(path)
        }
        Err(e) => {
            error!(target: targets::RENDERER, "Failed to create icon {}. Error: {e}", icon.filename);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BitmapFont;
    use image::Rgba;

    const BACKGROUND: Rgba<u8> = Rgba([0x4A, 0x90, 0xE2, 0xFF]);

    fn count_non_background(image: &ImageBuffer) -> usize {
        image
            .as_rgba8_bytes()
            .chunks(4)
            .filter(|p| *p != BACKGROUND.0)
            .count()
    }

    #[test]
    fn zero_size_is_rejected() {
        let icon = IconSpec::new("empty.png", 0);
        let err = render_icon(&icon, None, &IconStyle::default()).unwrap_err();
        assert!(matches!(err, IconError::InvalidDimensions { width: 0, height: 0 }));
    }

    #[test]
    fn no_font_renders_solid_square() {
        let icon = IconSpec::new("icon48.png", 48);
        let image = render_icon(&icon, None, &IconStyle::default()).unwrap();
        assert_eq!(image.dimensions(), (48, 48));
        assert_eq!(count_non_background(&image), 0);
    }

    #[test]
    fn bitmap_label_is_centered() {
        let handle = FontHandle::Fixed(BitmapFont::builtin());
        let style = IconStyle::default();
        let image = render_icon(&IconSpec::new("icon128.png", 128), Some(&handle), &style).unwrap();
        assert!(count_non_background(&image) > 0);

        let mut font = handle.at_size(83);
        let bounds = font.rasterize(&style.label).unwrap().bounds().unwrap();
        let origin = bounds.centered_origin(128);
        let top = origin.y + bounds.top;
        let bottom = origin.y + bounds.bottom;
        // Ink is vertically centered to within a pixel
        assert!((top - (128 - bottom)).abs() <= 1);
    }

    #[test]
    fn undrawable_label_keeps_solid_square() {
        let handle = FontHandle::Fixed(BitmapFont::builtin());
        let style = IconStyle {
            label: String::new(),
            ..IconStyle::default()
        };
        let image = render_icon(&IconSpec::new("icon16.png", 16), Some(&handle), &style).unwrap();
        assert_eq!(count_non_background(&image), 0);
    }

    #[test]
    fn whitespace_label_uses_advance_measurement() {
        let mut image = ImageBuffer::from_color(16, 16, IconStyle::default().background);
        let mut font = SizedFont::Fixed(BitmapFont::builtin());
        let style = IconStyle {
            label: " ".to_string(),
            ..IconStyle::default()
        };
        let origin = draw_label(&mut image, &mut font, &style).unwrap();
        assert_eq!(origin, Point::new(4, 4));
    }

    #[test]
    fn write_icon_reports_save_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let icon = IconSpec::new("icon16.png", 16);

        let err = write_icon(&icon, &missing, None, &IconStyle::default()).unwrap_err();
        assert!(matches!(err, IconError::ImageSave { .. }));
        assert!(create_icon(&icon, &missing, None, &IconStyle::default()).is_none());
    }

    #[test]
    fn label_logs_name_the_icon_file() {
        let handle = FontHandle::Fixed(BitmapFont::builtin());
        let icon = IconSpec::new("icon16.png", 16);
        let logs = crate::logging::capture_logs(|| {
            render_icon(&icon, Some(&handle), &IconStyle::default()).unwrap();
        });

        assert!(
            logs.contains("horizon_icongen::renderer: Drew text 'C+' on icon16.png"),
            "{logs}"
        );
    }

    #[test]
    fn save_failure_logs_name_the_icon_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let icon = IconSpec::new("icon48.png", 48);
        let logs = crate::logging::capture_logs(|| {
            assert!(create_icon(&icon, &missing, None, &IconStyle::default()).is_none());
        });

        assert!(
            logs.contains("horizon_icongen::renderer: Failed to create icon icon48.png"),
            "{logs}"
        );
    }
}
