//! Stderr logger for the `mm-bench` binary.
//!
//! Library crates only emit through the `log` macros; this module is the one
//! place a logger gets installed. Records are printed to stderr, colored by
//! level with ANSI escape codes.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable that overrides the configured level.
pub const LOG_ENV: &str = "MM_LOG";

/// Install the stderr logger.
///
/// The level comes from `MM_LOG` when it holds a valid level name
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`), else from `default`.
/// Fails if a logger is already installed.
pub fn init(default: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: StderrLogger = StderrLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(resolve_level(std::env::var(LOG_ENV).ok().as_deref(), default));
    Ok(())
}

fn resolve_level(env: Option<&str>, default: LevelFilter) -> LevelFilter {
    env.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = writeln!(
            std::io::stderr().lock(),
            "\u{1B}[{}m[{:>5}][{}] {}\u{1B}[0m",
            level_to_color_code(record.level()),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_to_color_code(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 34,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}
