//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `filter` uses `RUST_LOG` syntax; an unparsable filter falls back to
/// `info`. `format` selects `json` output, anything else prints plain text.
pub fn init(filter: &str, format: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
