//! Square PNG text icon generator.
//!
//! This crate renders a fixed table of square icons, each a solid background
//! with a short label centered on it, and writes them as PNG files. It is a
//! build-time asset tool: one sequential pass, no runtime configuration.
//!
//! # Getting Started
//!
//! Generate the default icon set into `icons/`:
//!
//! ```no_run
//! use horizon_icongen::{generate_icons, IconConfig};
//!
//! horizon_icongen::logging::init();
//! let report = generate_icons(&IconConfig::default());
//! println!("Wrote {} icons", report.written.len());
//! ```
//!
//! # Rendering a Single Icon
//!
//! Resolve a font once and render icons in memory:
//!
//! ```no_run
//! use horizon_icongen::{render_icon, IconSpec, IconStyle};
//! use horizon_icongen::text::resolve_font;
//!
//! let style = IconStyle::default();
//! let font = resolve_font(&["/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"], &style.label);
//! let image = render_icon(&IconSpec::new("icon128.png", 128), font.as_ref(), &style)?;
//! image.save_png("icon128.png")?;
//! # Ok::<(), horizon_icongen::IconError>(())
//! ```
//!
//! # Failure Handling
//!
//! Nothing short of a panic stops a batch. Missing fonts fall back to a
//! built-in bitmap font, undrawable labels leave a plain square, and an icon
//! that cannot be saved is logged and skipped while the rest are written.

mod batch;
mod config;
mod error;
mod image_buffer;
pub mod logging;
mod renderer;
pub mod text;
mod types;

pub use batch::{GenerationReport, generate_icons};
pub use config::{
    DEFAULT_BACKGROUND, DEFAULT_FONT_CANDIDATES, DEFAULT_FONT_SIZE_RATIO, DEFAULT_ICONS,
    DEFAULT_LABEL, DEFAULT_OUTPUT_DIR, IconConfig, IconSpec, IconStyle,
};
pub use error::{IconError, IconResult};
pub use image_buffer::ImageBuffer;
pub use renderer::{create_icon, draw_label, render_icon, write_icon};
pub use types::{Color, Point};
