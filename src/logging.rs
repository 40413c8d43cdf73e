//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `level` is used as the filter when `RUST_LOG` is unset or invalid; `format`
/// is `json` for one JSON object per line, anything else for human-readable
/// text. Calling this more than once is a no-op.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let _ = if format == "json" {
        builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    } else {
        builder.try_init()
    };
}
