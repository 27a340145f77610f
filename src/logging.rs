//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The library only emits `tracing` events; the binary installs a subscriber.
//!
//! - `warn`: unreadable files and other non-fatal problems (default)
//! - `info`: check summary
//! - `debug`: skipped files, per-file violation counts
//! - `trace`: clean files, walker decisions
//!
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a level
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("police={}", level.as_str().to_lowercase())))
}

/// Install the global stderr subscriber
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging(verbosity: u8, ansi: bool) {
    let filter = build_env_filter(level_from_verbosity(verbosity));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
