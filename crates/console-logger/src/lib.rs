//! Console Logger
//!
//! `log` backend for the browser console. Every record is also kept in a
//! bounded ring buffer so the most recent lines can be inspected from the UI
//! or attached to a bug report.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-capacity buffer of formatted log lines; the oldest line is evicted first.
#[derive(Debug)]
pub struct RingBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    fn format(record: &Record) -> String {
        format!(
            "{} {:<5} {}: {}",
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }

    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
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
        let line = Self::format(record);
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
    eprintln!("{line}");
}

/// Install the global logger. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent lines recorded by the global logger, oldest first.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}
