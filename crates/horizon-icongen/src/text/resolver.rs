//! Font resolution and per-size materialization.
//!
//! A run resolves one [`FontHandle`] up front and materializes it once per
//! icon size as a [`SizedFont`]. Neither step ever fails outward: missing or
//! broken fonts are replaced by the built-in bitmap font.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use super::bitmap::BitmapFont;
use super::font_system::probe_font_file;
use super::mask::TextMask;
use super::outline::OutlineFont;
use crate::error::{IconError, IconResult};
use crate::logging::targets;

/// The font chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontHandle {
    /// A font file that can be loaded at any pixel size.
    Scalable(PathBuf),
    /// The built-in bitmap font. Requested sizes are ignored.
    Fixed(BitmapFont),
}

impl FontHandle {
    /// Whether the font can be instantiated at arbitrary sizes.
    pub fn is_scalable(&self) -> bool {
        matches!(self, FontHandle::Scalable(_))
    }

    /// Instantiate this font at `size` pixels.
    ///
    /// Scalable fonts that fail to load are replaced by the bitmap font.
    pub fn at_size(&self, size: u32) -> SizedFont {
        match self {
            FontHandle::Scalable(path) => match OutlineFont::load(path, size) {
                Ok(font) => SizedFont::Outline(font),
                Err(e) => {
                    error!(
                        target: targets::TEXT,
                        "Error loading font {} at size {size}. Falling back. Error: {e}",
                        path.display()
                    );
                    SizedFont::Fixed(BitmapFont::builtin())
                }
            },
            FontHandle::Fixed(font) => SizedFont::Fixed(*font),
        }
    }
}

/// A font bound to one pixel size, ready to draw.
#[derive(Debug)]
pub enum SizedFont {
    /// An outline font instantiated at a size.
    Outline(OutlineFont),
    /// The fixed bitmap font.
    Fixed(BitmapFont),
}

impl SizedFont {
    /// Rasterize `text` as a single line at the origin.
    pub fn rasterize(&mut self, text: &str) -> IconResult<TextMask> {
        match self {
            SizedFont::Outline(font) => font.rasterize(text),
            SizedFont::Fixed(font) => Ok(font.rasterize(text)),
        }
    }

    /// Whether this is the bitmap fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SizedFont::Fixed(_))
    }
}

/// Pixel size of the label for an icon, truncated to whole pixels.
pub fn font_pixel_size(icon_size: u32, ratio: f32) -> u32 {
    (icon_size as f64 * ratio as f64) as u32
}

/// Pick the first candidate that is a readable font file.
///
/// Bare file names are also searched for in the system font directories.
///
/// Falls back to the built-in bitmap font when no candidate works, and
/// returns `None` only when that font cannot draw `label` either.
pub fn resolve_font<P: AsRef<Path>>(candidates: &[P], label: &str) -> Option<FontHandle> {
    for candidate in candidates {
        let path = candidate.as_ref();
        match probe_font_file(path) {
            Ok(probed) => {
                info!(target: targets::TEXT, "Using font: {}", probed.path.display());
                debug!(
                    target: targets::TEXT,
                    units_per_em = probed.units_per_em,
                    glyphs = probed.glyph_count,
                    "Font metrics"
                );
                return Some(FontHandle::Scalable(probed.path));
            }
            Err(e @ IconError::FontNotFound { .. }) => {
                debug!(target: targets::TEXT, "Font not found or cannot be opened: {e}");
            }
            Err(e) => {
                warn!(target: targets::TEXT, "Error loading font {}: {e}", path.display());
            }
        }
    }

    warn!(target: targets::TEXT, "No preferred fonts found. Attempting to load default font.");
    match BitmapFont::load_for(label) {
        Ok(font) => {
            info!(target: targets::TEXT, "Using built-in bitmap font.");
            Some(FontHandle::Fixed(font))
        }
        Err(e) => {
            error!(target: targets::TEXT, "Could not load default font: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FONT_CANDIDATES;
    use std::io::Write;

    fn installed_font() -> Option<PathBuf> {
        DEFAULT_FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|path| probe_font_file(path).is_ok())
    }

    #[test]
    fn pixel_size_truncates() {
        assert_eq!(font_pixel_size(16, 0.65), 10);
        assert_eq!(font_pixel_size(48, 0.65), 31);
        assert_eq!(font_pixel_size(128, 0.65), 83);
        assert_eq!(font_pixel_size(1, 0.65), 0);
    }

    #[test]
    fn no_candidates_falls_back_to_bitmap() {
        let handle = resolve_font::<&str>(&[], "C+");
        assert_eq!(handle, Some(FontHandle::Fixed(BitmapFont::builtin())));
        assert!(!handle.unwrap().is_scalable());
    }

    #[test]
    fn unusable_label_yields_no_font() {
        let handle = resolve_font(&["/definitely/not/here.ttf"], "\u{4E2D}");
        assert!(handle.is_none());
    }

    #[test]
    fn skips_missing_and_invalid_candidates() {
        let Some(valid) = installed_font() else {
            eprintln!("skipping skips_missing_and_invalid_candidates: no candidate font installed");
            return;
        };
        let mut garbage = tempfile::NamedTempFile::new().unwrap();
        garbage.write_all(b"not a font").unwrap();

        let candidates = vec![
            PathBuf::from("/definitely/not/here.ttf"),
            garbage.path().to_path_buf(),
            valid.clone(),
        ];

        let handle = resolve_font(&candidates, "C+");
        assert_eq!(handle, Some(FontHandle::Scalable(valid)));
    }

    #[test]
    fn resolution_is_deterministic() {
        let candidates: Vec<PathBuf> = DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect();
        let first = resolve_font(&candidates, "C+");
        let second = resolve_font(&candidates, "C+");
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_handle_ignores_size() {
        let handle = FontHandle::Fixed(BitmapFont::builtin());
        let mut small = handle.at_size(10);
        let mut large = handle.at_size(83);
        assert!(small.is_fallback());
        assert_eq!(
            small.rasterize("C+").unwrap().bounds(),
            large.rasterize("C+").unwrap().bounds()
        );
    }

    #[test]
    fn broken_scalable_handle_substitutes_bitmap() {
        let handle = FontHandle::Scalable(PathBuf::from("/definitely/not/here.ttf"));
        assert!(handle.at_size(31).is_fallback());
    }

    #[test]
    fn scalable_handle_materializes_outline() {
        let Some(valid) = installed_font() else {
            eprintln!("skipping scalable_handle_materializes_outline: no candidate font installed");
            return;
        };
        let sized = FontHandle::Scalable(valid).at_size(83);
        match sized {
            SizedFont::Outline(font) => assert_eq!(font.size(), 83),
            SizedFont::Fixed(_) => panic!("expected an outline font"),
        }
    }

    #[test]
    fn bare_candidate_name_resolves_from_system_fonts() {
        let Some(valid) = installed_font() else {
            eprintln!("skipping bare_candidate_name_resolves_from_system_fonts: no candidate font installed");
            return;
        };
        let name = valid.file_name().unwrap();

        match resolve_font(&[name], "C+") {
            Some(FontHandle::Scalable(path)) => assert_eq!(path.file_name(), Some(name)),
            other => panic!("expected a scalable font, got {other:?}"),
        }
    }

    #[test]
    fn fallback_is_logged_under_text_target() {
        let logs = crate::logging::capture_logs(|| {
            resolve_font(&["/definitely/not/here.ttf"], "C+");
        });

        assert!(
            logs.contains("horizon_icongen::text: No preferred fonts found."),
            "{logs}"
        );
        assert!(logs.contains("horizon_icongen::text: Using built-in bitmap font."), "{logs}");
    }
}
