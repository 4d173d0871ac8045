//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `RUST_LOG` still takes precedence for individual modules; `level` sets the baseline.
pub fn init(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Initialize logging from a textual level, falling back to `Info`
///
/// An unrecognised name is reported once the logger is up.
pub fn init_with_name(level: &str) {
    match parse_level(level) {
        Ok(filter) => init(filter),
        Err(_) => {
            init(log::LevelFilter::Info);
            log::warn!("Unknown log level '{}', using info", level);
        }
    }
}

/// Parse a textual level such as `"info"` or `"debug"`
pub fn parse_level(level: &str) -> Result<log::LevelFilter, log::ParseLevelError> {
    level.parse()
}
