//! Logging setup for the icon generator.
//!
//! The library only emits `tracing` events. The binary installs a plain
//! formatting subscriber at INFO level:
//!
//! ```no_run
//! horizon_icongen::logging::init();
//! ```

use tracing::Level;

/// Span names used for tracing.
pub mod span_names {
    /// One full generation run.
    pub const BATCH: &str = "horizon_icongen::batch";
}

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const ICONGEN: &str = "horizon_icongen";
    /// Font resolution and materialization.
    pub const TEXT: &str = "horizon_icongen::text";
    /// Per-icon rendering.
    pub const RENDERER: &str = "horizon_icongen::renderer";
}

/// Install the INFO-level fmt subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Install the fmt subscriber with a custom maximum level.
pub fn init_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Run `f` under a DEBUG fmt subscriber and return everything it logged.
#[cfg(test)]
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
