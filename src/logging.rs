//! Logging middleware for debugging and diagnostics.
//!
//! This module provides an opt-in tracing setup for binaries and test
//! harnesses embedding the crate:
//! - Writes to stderr (the guard's own diagnostic sink owns stdout)
//! - Supports configurable log levels via `RUST_LOG` or programmatic
//!   configuration
//! - Includes timestamps in all log entries
//!
//! The guard's context sink is deliberately not routed through here; it is
//! an explicit dependency injected at guard construction.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level configuration for the logging middleware.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level - includes per-invocation classification decisions
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warning level
    Warn,
    /// Error level - least verbose
    Error,
    /// Disable logging entirely
    Off,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error | LogLevel::Off => Level::ERROR,
        }
    }
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Initialize the logging middleware at the given level.
///
/// Should be called once at the start of the embedding application or test
/// harness. `RUST_LOG` takes precedence over the configured level. Returns
/// an error if a global subscriber is already installed, which callers in
/// test harnesses may safely ignore.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.directive())
    };

    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
}

/// Initialize logging with the default (info) level.
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LogLevel::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_default_level_is_info() {
        assert!(matches!(LogLevel::default(), LogLevel::Info));
    }

    #[test]
    fn test_directives_match_env_filter_syntax() {
        assert_eq!(LogLevel::Debug.directive(), "debug");
        assert_eq!(LogLevel::Off.directive(), "off");
    }

    #[test]
    fn test_init_logging_is_idempotent_enough_for_tests() {
        // First call may succeed or fail depending on test ordering; the
        // second must fail because a subscriber is already installed.
        let _ = init_default_logging();
        assert!(init_logging(LogLevel::Debug).is_err());
    }
}
