//! Logger initialisation for the release script binaries.
//!
//! Library code logs through the `log` facade. The binaries install an
//! `env_logger` backend writing to stderr. `RUST_LOG`, when set, takes
//! precedence over the verbosity flag.

use log::LevelFilter;

/// Map a `-v` count to a log level.
///
/// # Examples
///
/// ```
/// use log::LevelFilter;
/// use release_scripts::logging::level_for_verbosity;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
/// assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
/// ```
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();
    if builder.try_init().is_err() {
        // A logger is already installed.
    }
}
