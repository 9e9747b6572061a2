//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize `env_logger` on stderr.
///
/// `debug_enabled` selects the `Debug` level, otherwise only warnings are
/// shown so the solver's own output stays clean. `RUST_LOG`, when set,
/// overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second initialisation (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
