//! Console logger for headless runs.
//!
//! The soundboard installs its own logger that feeds the TUI log panel;
//! this one prints straight to stdout.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger {
    max_level: Level,
}

impl ConsoleLogger {
    pub const fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_str = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        println!("[{}] {}: {}", level_str, record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(Level::Trace);

/// Install the console logger. A logger that is already set wins.
pub fn init(max_level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
