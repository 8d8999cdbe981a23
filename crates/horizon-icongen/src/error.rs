//! Error types for the icon generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating icons.
///
/// None of these abort a batch. Each one is recovered at the nearest
/// boundary by substituting a safe default or skipping a single icon.
#[derive(Error, Debug)]
pub enum IconError {
    /// A candidate font file could not be opened.
    #[error("font not found: {}", .path.display())]
    FontNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate font file exists but does not parse as a font.
    #[error("invalid font file {}: {reason}", .path.display())]
    InvalidFont { path: PathBuf, reason: String },

    /// A resolved font could not be instantiated at a pixel size.
    #[error("failed to load font {} at size {size}: {reason}", .path.display())]
    FontLoadAtSize {
        path: PathBuf,
        size: u32,
        reason: String,
    },

    /// The built-in bitmap font has no glyph for a label character.
    #[error("built-in font has no glyph for {0:?}")]
    MissingGlyph(char),

    /// The label's extent could not be measured.
    #[error("failed to measure text: {0}")]
    TextMeasurement(String),

    /// The label could not be drawn onto the icon.
    #[error("failed to draw text: {0}")]
    TextDraw(String),

    /// Invalid image dimensions (zero width or height).
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The icon could not be encoded or written.
    #[error("failed to save image {}: {source}", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for icon generation operations.
pub type IconResult<T> = Result<T, IconError>;
