//! Fixed generator configuration.
//!
//! Everything the binary needs is a compile-time constant collected into
//! [`IconConfig::default`]. The builder setters exist for library callers
//! and tests that need a different output directory or font list.

use std::path::{Path, PathBuf};

use crate::types::Color;

/// One icon to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
    /// File name written inside the output directory.
    pub filename: &'static str,
    /// Width and height in pixels.
    pub size: u32,
}

impl IconSpec {
    /// Create a new icon entry.
    pub const fn new(filename: &'static str, size: u32) -> Self {
        Self { filename, size }
    }
}

/// The icons generated by default, in generation order.
pub const DEFAULT_ICONS: [IconSpec; 3] = [
    IconSpec::new("icon16.png", 16),
    IconSpec::new("icon48.png", 48),
    IconSpec::new("icon128.png", 128),
];

/// Directory the icons are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Candidate font files, highest priority first.
pub const DEFAULT_FONT_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:/Windows/Fonts/arialbd.ttf",
    "arial.ttf",
    "verdana.ttf",
];

/// Background fill as a hex color.
pub const DEFAULT_BACKGROUND: &str = "#4A90E2";

/// Label drawn on every icon.
pub const DEFAULT_LABEL: &str = "C+";

/// Label pixel size relative to the icon size.
pub const DEFAULT_FONT_SIZE_RATIO: f32 = 0.65;

/// Colors and label shared by every icon of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Fill color of the square.
    pub background: Color,
    /// Color of the label.
    pub foreground: Color,
    /// Text drawn centered on the icon.
    pub label: String,
    /// Label pixel size as a fraction of the icon size.
    pub font_size_ratio: f32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: Color::from_hex(DEFAULT_BACKGROUND).unwrap_or(Color::BLACK),
            foreground: Color::WHITE,
            label: DEFAULT_LABEL.to_string(),
            font_size_ratio: DEFAULT_FONT_SIZE_RATIO,
        }
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Directory the icons are written to.
    pub output_dir: PathBuf,
    /// Icons to generate, in order.
    pub icons: Vec<IconSpec>,
    /// Font files to try, highest priority first.
    pub font_candidates: Vec<PathBuf>,
    /// Colors and label.
    pub style: IconStyle,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            icons: DEFAULT_ICONS.to_vec(),
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            style: IconStyle::default(),
        }
    }
}

impl IconConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replace the icon table.
    pub fn icons(mut self, icons: impl IntoIterator<Item = IconSpec>) -> Self {
        self.icons = icons.into_iter().collect();
        self
    }

    /// Replace the font candidate list.
    pub fn font_candidates<P: AsRef<Path>>(mut self, candidates: impl IntoIterator<Item = P>) -> Self {
        self.font_candidates = candidates
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        self
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.style.label = label.into();
        self
    }

    /// Full path of an icon inside the output directory.
    pub fn icon_path(&self, icon: &IconSpec) -> PathBuf {
        self.output_dir.join(icon.filename)
    }
}
