//! Rolling Logger
//!
//! `log` backend that keeps the most recent formatted lines in a circular
//! buffer. On wasm32 every line is also written to the browser console at
//! the matching console level.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// The newest `limit` lines, newest first
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.iter().rev().take(limit).cloned().collect()
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_line(record: &Record) -> String {
    format!(
        "{} [{}] {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install a leaked `RollingLogger` as the global logger
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls() {
        let logger = RollingLogger::new(LevelFilter::Debug, 2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");
        let lines = logger.recent(10);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] test: three"));
        assert!(lines[1].ends_with("[INFO] test: two"));
    }

    #[test]
    fn test_recent_newest_first() {
        let logger = RollingLogger::new(LevelFilter::Debug, 10);
        for message in ["one", "two", "three"] {
            emit(&logger, Level::Info, message);
        }
        let recent = logger.recent(2);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("test: three"));
        assert!(recent[1].ends_with("test: two"));
        assert_eq!(logger.recent(50).len(), 3);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Warn, "shown");
        let lines = logger.recent(10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN]"));
    }
}
