use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingSettings;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` overrides the configured level. `format = "pretty"` gives
/// human-readable output, anything else logs JSON lines.
pub fn init_tracing(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}
