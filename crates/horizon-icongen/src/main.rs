//! Generates `icons/icon16.png`, `icons/icon48.png` and `icons/icon128.png`.
//!
//! Run from the directory that should receive the `icons/` folder:
//! ```sh
//! cargo run --bin horizon-icongen
//! ```

use horizon_icongen::logging::targets;
use horizon_icongen::{IconConfig, generate_icons};

fn main() {
    horizon_icongen::logging::init();

    let report = generate_icons(&IconConfig::default());
    if !report.is_complete() {
        tracing::warn!(
            target: targets::ICONGEN,
            "{} of {} icons could not be generated",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }
}
