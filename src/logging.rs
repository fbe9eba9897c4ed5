//! Logging setup for the demo binary.
//!
//! Logs go to stdout. Set `DEBUG_LOGGING=1` to enable debug output for the
//! debug-hud crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,debug_hud=debug,debug_hud_core=debug,debug_hud_overlay=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::info!(debug_logging, "debug-hud logging initialized");
}
