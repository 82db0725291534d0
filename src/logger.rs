// This file implements the application's logging system.
// It provides macros for different log levels (INFO, WARN, ERROR, DEBUG)
// and handles conditional output: debug messages only with `--debug`,
// and everything except errors is silenced by `--quiet`.

use std::sync::OnceLock; // Ensures each flag is initialized exactly once.
use std::sync::atomic::{AtomicBool, Ordering}; // Thread-safe access to the flags.

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Provides convenient logging macros.
/// `#[macro_export]` makes these macros globally available within the crate.

// `log_info!` for general progress messages. Suppressed in quiet mode.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Level::Info) {
            eprintln!("{} {}", colored::Colorize::bright_green("[INFO]"), format!($($arg)*));
        }
    };
}

// `log_warn!` for non-critical issues. Suppressed in quiet mode.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Level::Warn) {
            eprintln!("{} {}", colored::Colorize::bright_yellow("[WARN]"), format!($($arg)*));
        }
    };
}

// `log_error!` for failures that end the run. Always printed.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!("{} {}", colored::Colorize::bright_red("[ERROR]"), format!($($arg)*)));
}

// `log_debug!` for detailed internal tracing.
// Messages are only printed if debug mode is enabled via `--debug`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Level::Debug) {
           eprintln!("{} {}", colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

// Global flags controlling which levels are emitted.
static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();
static QUIET: OnceLock<AtomicBool> = OnceLock::new();

/// Initializes the logger.
/// This function should be called once at application startup.
///
/// # Arguments
/// * `debug`: If `true`, enables debug logging.
/// * `quiet`: If `true`, suppresses all output except errors.
pub fn init(debug: bool, quiet: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);
    QUIET
        .get_or_init(|| AtomicBool::new(quiet))
        .store(quiet, Ordering::Relaxed);

    crate::log_debug!("Logger initialized in DEBUG mode (quiet: {})", quiet);
}

/// Checks if debug logging is currently enabled.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false) // Default to false if `init` was never called.
}

/// Checks if non-error output is suppressed.
pub fn is_quiet() -> bool {
    QUIET.get().map(|f| f.load(Ordering::Relaxed)).unwrap_or(false)
}

/// Whether a line at `level` is printed under the given flags.
/// Errors always print; quiet wins over debug for everything else.
pub fn emits(level: Level, debug: bool, quiet: bool) -> bool {
    match level {
        Level::Error => true,
        _ if quiet => false,
        Level::Debug => debug,
        Level::Info | Level::Warn => true,
    }
}

/// Whether a line at `level` is printed under the flags set by `init`.
/// Used by the logging macros.
pub fn enabled(level: Level) -> bool {
    emits(level, is_debug_enabled(), is_quiet())
}
