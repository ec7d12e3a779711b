// logging.rs
//
// Diagnostics go to stderr, quiet by default (`warn`). `RUST_LOG` overrides
// the filter, e.g. `RUST_LOG=basic_calc::repl=debug basic-calc`.

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Only the first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        // Another subscriber may already be installed when embedded.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
