//! Scalable outline fonts bound to a single pixel size.

use std::path::Path;

use cosmic_text::{Attrs, Buffer, Family, Metrics, Shaping, SwashCache, Wrap};
use tracing::debug;

use super::font_system::{FontFaceInfo, FontSystem, FontSystemConfig};
use super::mask::TextMask;
use crate::error::{IconError, IconResult};
use crate::logging::targets;

/// Line height relative to font size, as used for single-line shaping.
const LINE_HEIGHT_MULTIPLIER: f32 = 1.2;

/// A font file instantiated at one pixel size.
///
/// Shaping goes through cosmic-text and glyphs are rasterized by its
/// swash cache, so the ink box comes from real glyph coverage.
pub struct OutlineFont {
    font_system: FontSystem,
    swash_cache: SwashCache,
    face: FontFaceInfo,
    size: u32,
}

impl OutlineFont {
    /// Load the font at `path` for rendering at `size` pixels per em.
    pub fn load(path: impl AsRef<Path>, size: u32) -> IconResult<Self> {
        let path = path.as_ref();
        let load_error = |reason: String| IconError::FontLoadAtSize {
            path: path.to_path_buf(),
            size,
            reason,
        };

        if size == 0 {
            return Err(load_error("font size must be positive".to_string()));
        }

        let font_system = FontSystem::from_font_file(path, FontSystemConfig::default())
            .map_err(|e| load_error(e.to_string()))?;
        let face = font_system
            .primary_face()
            .ok_or_else(|| load_error("font file has no faces".to_string()))?;
        if face.family().is_none() {
            return Err(load_error("font face has no family name".to_string()));
        }

        debug!(
            target: targets::TEXT,
            path = %path.display(),
            family = face.family().unwrap_or_default(),
            size,
            "Loaded outline font"
        );

        Ok(Self {
            font_system,
            swash_cache: SwashCache::new(),
            face,
            size,
        })
    }

    /// Pixel size this font is bound to.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Shape and rasterize `text` as a single line at the origin.
    pub fn rasterize(&mut self, text: &str) -> IconResult<TextMask> {
        let font_size = self.size as f32;
        let line_height = font_size * LINE_HEIGHT_MULTIPLIER;
        let family = self
            .face
            .family()
            .ok_or_else(|| IconError::TextDraw("font face has no family name".to_string()))?;

        let attrs = Attrs::new()
            .family(Family::Name(family))
            .weight(self.face.weight)
            .style(self.face.style)
            .stretch(self.face.stretch);

        let fs = self.font_system.inner_mut();
        let mut buffer = Buffer::new(fs, Metrics::new(font_size, line_height));
        buffer.set_wrap(fs, Wrap::None);
        buffer.set_size(fs, None, None);
        buffer.set_text(fs, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(fs, false);

        let glyph_count: usize = buffer.layout_runs().map(|run| run.glyphs.len()).sum();
        if glyph_count == 0 {
            return Err(IconError::TextDraw(format!("no glyphs shaped for {text:?}")));
        }
        let advance_width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max);

        let mut mask = TextMask::new(advance_width.ceil() as u32, line_height.ceil() as u32);
        buffer.draw(
            fs,
            &mut self.swash_cache,
            cosmic_text::Color::rgb(0xFF, 0xFF, 0xFF),
            |x, y, w, h, color| {
                for dy in 0..h as i32 {
                    for dx in 0..w as i32 {
                        mask.push(x + dx, y + dy, color.a());
                    }
                }
            },
        );

        Ok(mask)
    }
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("path", &self.font_system.path())
            .field("family", &self.face.family())
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FONT_CANDIDATES;
    use crate::text::probe_font_file;

    fn installed_font() -> Option<&'static str> {
        DEFAULT_FONT_CANDIDATES
            .iter()
            .copied()
            .find(|path| probe_font_file(path).is_ok())
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = OutlineFont::load(DEFAULT_FONT_CANDIDATES[0], 0).unwrap_err();
        assert!(matches!(err, IconError::FontLoadAtSize { size: 0, .. }));
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = OutlineFont::load("/definitely/not/here.ttf", 12).unwrap_err();
        assert!(matches!(err, IconError::FontLoadAtSize { size: 12, .. }));
    }

    #[test]
    fn larger_sizes_produce_larger_ink() {
        let Some(path) = installed_font() else {
            return;
        };
        let mut small = OutlineFont::load(path, 10).unwrap();
        let mut large = OutlineFont::load(path, 83).unwrap();

        let small_box = small.rasterize("C+").unwrap().bounds().unwrap();
        let large_box = large.rasterize("C+").unwrap().bounds().unwrap();

        assert!(large_box.width() > small_box.width());
        assert!(large_box.height() > small_box.height());
        assert!(large_box.height() <= 83);
    }
}
