//! `log` backend for the command line.
//!
//! Records go to stderr with a timestamp and a level marker, so stdout
//! stays clean for JSON output.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger. Only the first call has any effect.
    pub fn init(level: LevelFilter) {
        if log::set_boxed_logger(Box::new(Self::new(level))).is_ok() {
            log::set_max_level(level);
        }
    }
}

fn marker(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️ ",
        Level::Info => "  ",
        Level::Debug | Level::Trace => "🔍",
    }
}

/// One formatted log line (without trailing newline).
pub fn format_line(level: Level, target: &str, message: &str, time: &str) -> String {
    if level <= Level::Info {
        format!("{} {} {}", time, marker(level), message)
    } else {
        format!("{} {} [{}] {}", time, marker(level), target, message)
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = Local::now().format("%H:%M:%S").to_string();
        eprintln!(
            "{}",
            format_line(record.level(), record.target(), &record.args().to_string(), &time)
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line_has_no_target() {
        let line = format_line(Level::Info, "paypage::store", "saved", "12:00:00");
        assert_eq!(line, "12:00:00    saved");
    }

    #[test]
    fn test_debug_line_has_target() {
        let line = format_line(Level::Debug, "paypage::editor", "derived", "12:00:00");
        assert!(line.contains("[paypage::editor]"));
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
