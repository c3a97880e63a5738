use std::sync::Mutex;

use chrono::Local;
use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Terminal logger for binaries embedding the interpolator. Verbosity is
/// driven by the process-wide max level, set at install time.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Call once at startup
pub fn init_console_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let lvl = record.level().as_str();
        let lvl = match record.level() {
            Level::Error => lvl.bright_red(),
            Level::Warn => lvl.yellow(),
            Level::Info => lvl.bright_green(),
            Level::Debug => lvl.bright_cyan(),
            Level::Trace => lvl.cyan(),
        };

        println!("{} [{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), lvl, record.args());
    }

    fn flush(&self) {}
}

/// Collects log records in memory, for tests.
#[derive(Default)]
pub struct BufferLogger {
    records: Mutex<Vec<String>>,
}

impl BufferLogger {
    /// Drain the collected records
    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

impl log::Log for BufferLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push(format!("{}: {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}
