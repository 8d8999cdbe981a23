//! Batch driver: one run over the configured icon table.

use std::path::PathBuf;

use tracing::{error, info, info_span};

use crate::config::{IconConfig, IconSpec};
use crate::error::IconError;
use crate::logging::{span_names, targets};
use crate::renderer::create_icon;
use crate::text::resolve_font;

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Paths of the icons that were written, in generation order.
    pub written: Vec<PathBuf>,
    /// Icons that could not be produced.
    pub failed: Vec<IconSpec>,
    /// Whether a scalable font was used for the labels.
    pub scalable_font: bool,
}

impl GenerationReport {
    /// Whether every configured icon was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate every icon in `config`, sequentially and in table order.
///
/// Never fails: per-icon problems are logged and recorded in the report.
pub fn generate_icons(config: &IconConfig) -> GenerationReport {
    let _span = info_span!(span_names::BATCH, icons = config.icons.len()).entered();
    info!(target: targets::ICONGEN, "Starting icon generation...");

    ensure_output_dir(config);

    let font = resolve_font(&config.font_candidates, &config.style.label);
    if font.is_none() {
        error!(target: targets::ICONGEN, "No usable font found. Cannot draw text on icons.");
    }

    let mut report = GenerationReport {
        scalable_font: font.as_ref().is_some_and(|f| f.is_scalable()),
        ..GenerationReport::default()
    };

    for icon in &config.icons {
        info!(
            target: targets::ICONGEN,
            "Generating {} ({}x{})...",
            icon.filename,
            icon.size,
            icon.size
        );
        match create_icon(icon, &config.output_dir, font.as_ref(), &config.style) {
            Some(path) => report.written.push(path),
            None => report.failed.push(*icon),
        }
    }

    info!(
        target: targets::ICONGEN,
        written = report.written.len(),
        failed = report.failed.len(),
        "Icon generation complete."
    );
    report
}

fn ensure_output_dir(config: &IconConfig) {
    let dir = &config.output_dir;
    if dir.is_dir() {
        return;
    }
    match std::fs::create_dir_all(dir) {
        Ok(()) => info!(target: targets::ICONGEN, "Created directory: {}", dir.display()),
        Err(source) => {
            let e = IconError::CreateDir {
                path: dir.clone(),
                source,
            };
            error!(target: targets::ICONGEN, "{e}");
        }
    }
}
