//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.*` on wasm32 and to
//! stderr elsewhere; the most recent ones are kept in a circular buffer so
//! they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept by default
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-size buffer of formatted lines; the oldest line is evicted first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// `[HH:MM:SS.mmm] LEVEL app::target: message`
    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} {}::{}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    pub fn recent(&self) -> Vec<String> {
        self.buffer.lock().map(|b| b.snapshot()).unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        write_line(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if another logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recently logged lines, oldest first. Empty before [`init_logger`].
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("dropped".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_logger_filters_and_buffers() {
        let logger = ConsoleLogger::new("Orphee", LevelFilter::Info, 10);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("scroll")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("scroll")
                .args(format_args!("target `#absent` not found"))
                .build(),
        );

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("WARN"));
        assert!(recent[0].ends_with("Orphee::scroll: target `#absent` not found"));
    }
}
