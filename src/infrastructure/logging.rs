// Logging setup - stdout carries the page, so every diagnostic goes to stderr
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. `RUST_LOG` wins over the `debug` setting.
pub fn init_logging(debug: bool) {
    let default_directive = if debug {
        "dashboard_render=debug"
    } else {
        "dashboard_render=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
