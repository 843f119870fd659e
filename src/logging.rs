//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr. `RUST_LOG` takes precedence over the
//! verbosity flags.
//!
//! - `warn`: default
//! - `info`: per-check finding counts (`-v`)
//! - `debug`: column resolution, disabled checks, unparsable durations (`-vv`)
//! - `trace`: per-record matching (`-vvv`)

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn level_from_flags(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("kintai_checker={}", level.as_str().to_lowercase()))
    })
}

/// Install the global subscriber. Calling it twice is harmless: the second
/// install attempt is ignored.
pub fn init_logging(level: Level) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .try_init();
}
