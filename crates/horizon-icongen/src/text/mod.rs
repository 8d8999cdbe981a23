//! Text rendering subsystem for icon labels.
//!
//! This module provides font probing (including lookup of bare file names
//! in the system font directories), font resolution with a built-in
//! fallback, and single-line label rasterization built on top of
//! cosmic-text, fontdb and ttf-parser.
//!
//! # Resolving a font
//!
//! ```no_run
//! use horizon_icongen::text::{resolve_font, font_pixel_size};
//!
//! let handle = resolve_font(&["/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"], "C+");
//!
//! if let Some(handle) = handle {
//!     let mut font = handle.at_size(font_pixel_size(128, 0.65));
//!     let mask = font.rasterize("C+")?;
//!     println!("Ink box: {:?}", mask.bounds());
//! }
//! # Ok::<(), horizon_icongen::IconError>(())
//! ```

mod bitmap;
mod font_system;
mod mask;
mod outline;
mod resolver;

pub use bitmap::{BITMAP_GLYPH_SIZE, BitmapFont};
pub use font_system::{
    FontFaceInfo, FontSystem, FontSystemConfig, ProbedFont, find_system_font, probe_font_file,
};
pub use mask::{CoveragePixel, TextBounds, TextMask};
pub use outline::OutlineFont;
pub use resolver::{FontHandle, SizedFont, font_pixel_size, resolve_font};
