//! Console Logger
//!
//! `log` backend for browser front ends. Records go to the devtools console
//! through `console_log` on wasm32 (stderr on native targets) and the most
//! recent lines are kept in a circular buffer so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained in the circular buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the console and a bounded in-memory buffer
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Format a record the way it appears in the console
    pub fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} {}: {}",
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }

    /// Append a line, evicting the oldest when full
    fn push(&self, line: String) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn emit(record: &Record, line: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = line;
            console_log::log(record);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = record;
            eprintln!("{}", line);
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
        let line = self.format(record);
        Self::emit(record, &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it twice returns an error from `log`.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::lines).unwrap_or_default()
}
