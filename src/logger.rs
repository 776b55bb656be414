use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber with an `info` default level.
pub fn init() {
    init_with_default("info");
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn init_with_default(default_level: &str) {

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Stage spans only get reported when someone is looking at debug output.
    let is_debug = env_filter.to_string().contains("debug") ||
                   env_filter.to_string().contains("trace");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
