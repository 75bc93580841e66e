//! Tracing setup for applications embedding the engine.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INSTALLED: Once = Once::new();

/// Installs the global tracing subscriber (idempotent).
///
/// The filter honours `RUST_LOG` and defaults to `info`. Reconciler
/// decisions are logged at `trace`, so `RUST_LOG=ripple_core=trace` shows
/// every mount/update/replace/unmount the engine performs.
pub fn init() {
    INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_err()
        {
            eprintln!("ripple tracing subscriber failed to initialize");
        }
    });
}
