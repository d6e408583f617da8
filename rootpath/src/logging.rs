//! Logging infrastructure for rootpath.
//!
//! The library reports through the `log` facade. This module provides a
//! simple stderr backend for it with three verbosity levels, used by the CLI.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "ROOTPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use rootpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including per-component resolution traces.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level let through at this setting.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }
}

/// A simple stderr-based logger.
///
/// It can be used directly, and it is also the `log` backend installed by
/// [`init_logger`], so messages from the resolver go through the same
/// level check.
///
/// # Examples
///
/// ```
/// use rootpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message unless the level is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(log::Level::Error, message);
    }

    /// Logs a warning message at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        self.emit(log::Level::Info, message);
    }

    /// Logs a debug message at Verbose level.
    pub fn debug(&self, message: &str) {
        self.emit(log::Level::Debug, message);
    }

    fn emit(&self, level: log::Level, message: &str) {
        if level <= self.level.filter() {
            eprintln!("{}: {message}", level.as_str());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level().as_str(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Initializes logging based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `ROOTPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// The returned logger is also installed as the global `log` backend the
/// first time this is called; later calls only adjust the maximum level.
///
/// # Examples
///
/// ```
/// use rootpath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let logger = Logger::new(level_from(verbose, quiet));
    // Fails only if a backend is already installed, in which case we keep it.
    let _ = log::set_boxed_logger(Box::new(logger));
    log::set_max_level(logger.level().filter());
    logger
}

fn level_from(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    LogLevel::Normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("QUIET").unwrap(), LogLevel::Quiet);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_logger_enabled_respects_level() {
        let logger = Logger::new(LogLevel::Normal);
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&warn));
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_level_defaults() {
        let saved = env::var(LOG_MODE_ENV).ok();
        env::remove_var(LOG_MODE_ENV);

        assert_eq!(level_from(false, false), LogLevel::Normal);

        if let Some(val) = saved {
            env::set_var(LOG_MODE_ENV, val);
        }
    }

    #[test]
    fn test_flags() {
        assert_eq!(level_from(true, false), LogLevel::Verbose);
        assert_eq!(level_from(false, true), LogLevel::Quiet);
        assert_eq!(level_from(true, true), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_level_from_env() {
        let saved = env::var(LOG_MODE_ENV).ok();

        env::set_var(LOG_MODE_ENV, "verbose");
        assert_eq!(level_from(false, false), LogLevel::Verbose);

        env::set_var(LOG_MODE_ENV, "invalid");
        assert_eq!(level_from(false, false), LogLevel::Normal);

        env::set_var(LOG_MODE_ENV, "normal");
        assert_eq!(level_from(false, true), LogLevel::Quiet);

        match saved {
            Some(val) => env::set_var(LOG_MODE_ENV, val),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    #[serial]
    fn test_init_logger_is_repeatable() {
        let first = init_logger(false, true);
        let second = init_logger(true, false);
        assert_eq!(first.level(), LogLevel::Quiet);
        assert_eq!(second.level(), LogLevel::Verbose);
        assert_eq!(log::max_level(), log::LevelFilter::Trace);
    }
}
