use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `--log-filter` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing and bridge `log` records (ureq logs through `log`).
///
/// - `filter` takes precedence, then `RUST_LOG`, then [`DEFAULT_FILTER`].
/// - Events go to stderr; stdout carries only the interactive transcript.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(filter: Option<&str>) {
    let _ = LogTracer::init();

    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
