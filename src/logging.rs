//! Logging Setup
//!
//! Routes `tracing` output to the browser console and the rolling activity log.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;

/// Buffers one formatted event and hands it to `console.*` on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        let value = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO, buf: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { level: *meta.level(), buf: Vec::new() }
    }
}

/// Target of user-facing activity events
pub const ACTIVITY_TARGET: &str = "activity";

/// Activity entries, newest first
pub fn activity() -> Vec<rolling_logger::LogEntry> {
    let mut entries = rolling_logger::global()
        .map(|log| log.entries_for(ACTIVITY_TARGET))
        .unwrap_or_default();
    entries.reverse();
    entries
}

pub fn clear_activity() {
    if let Some(log) = rolling_logger::global() {
        log.clear();
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(config: &AppConfig) {
    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let logger_config = rolling_logger::LoggerConfig {
        capacity: config.log_capacity,
        level,
    };
    if let Err(e) = rolling_logger::init(logger_config, ConsoleMakeWriter) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", e).into());
    }
}
