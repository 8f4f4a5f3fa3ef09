//! Logging bootstrap
//!
//! Logs go to stderr so rendered views on stdout stay clean. `RUST_LOG`
//! takes precedence over the configured level.

use log::LevelFilter;

/// Install the global logger. Calling it again is harmless.
pub fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
