#![deny(missing_docs)]
//! Shared logging utilities for the scanner workspace.
//!
//! This crate provides the `scan_*` logging macros used across the codebase,
//! the level lookup shared by every front-end, and a minimal test initializer
//! for the global logger.

use log::LevelFilter;

/// Environment variable consulted for the log level override.
pub const LEVEL_ENV_VAR: &str = "PHISHGUARD_LOG";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! scan_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! scan_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! scan_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! scan_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! scan_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `"debug"` or `"WARN"`.
///
/// Unknown or empty names yield `None` so callers can fall back to their own default.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

/// Resolves the level from [`LEVEL_ENV_VAR`], or `default` when unset or invalid.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    std::env::var(LEVEL_ENV_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(default)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let default = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level_from_env(default),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
