//! Rolling Logger
//!
//! Keeps the most recent tracing events in a fixed-size circular buffer so the
//! UI can show an activity history, and forwards every event to a
//! caller-supplied writer (the browser console in the front end).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Local};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Default number of entries kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static GLOBAL: OnceLock<RollingLog> = OnceLock::new();

/// One captured log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity buffer; the oldest entry is evicted on overflow
#[derive(Debug)]
pub struct RollingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Shared handle to a rolling buffer
#[derive(Debug, Clone)]
pub struct RollingLog {
    inner: Arc<Mutex<RollingBuffer>>,
}

impl RollingLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RollingBuffer::new(capacity))),
        }
    }

    /// Tracing layer that records into this log
    pub fn layer(&self) -> RollingLayer {
        RollingLayer { log: self.clone() }
    }

    pub fn push(&self, entry: LogEntry) {
        self.lock().push(entry);
    }

    /// Copy of all entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Entries whose target equals `target`, oldest first
    pub fn entries_for(&self, target: &str) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|e| e.target == target)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RollingBuffer> {
        // A panic while holding the lock cannot leave the deque half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// `tracing_subscriber` layer pushing every event into a [`RollingLog`]
pub struct RollingLayer {
    log: RollingLog,
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.log.push(LogEntry {
            timestamp: Local::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.finish(),
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.join(" ")
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: LevelFilter::INFO,
        }
    }
}

/// Install the global subscriber: a plain-text fmt layer writing through
/// `make_writer` plus the rolling buffer layer.
///
/// Timestamps are left to the buffer because the default fmt timer reads
/// `SystemTime`, which is unavailable on `wasm32-unknown-unknown`.
pub fn init<W>(config: LoggerConfig, make_writer: W) -> Result<RollingLog, TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let log = GLOBAL.get_or_init(|| RollingLog::new(config.capacity)).clone();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time()
        .with_target(true);

    tracing_subscriber::registry()
        .with(config.level)
        .with(fmt_layer)
        .with(log.layer())
        .try_init()?;

    Ok(log)
}

/// The log installed by [`init`], if any
pub fn global() -> Option<&'static RollingLog> {
    GLOBAL.get()
}

/// Snapshot of the global log, empty before [`init`]
pub fn snapshot() -> Vec<LogEntry> {
    global().map(RollingLog::entries).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(entry(&format!("m{}", i)));
        }
        assert_eq!(buffer.len(), 3);
        let messages: Vec<_> = buffer.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().next().map(|e| e.message.as_str()), Some("b"));
    }

    #[test]
    fn test_layer_captures_events() {
        let log = RollingLog::new(10);
        let subscriber = tracing_subscriber::registry().with(log.layer());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "activity", id = 7, "Fee deleted");
            tracing::warn!("plain warning");
        });

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].target, "activity");
        assert_eq!(entries[0].message, "Fee deleted id=7");
        assert_eq!(entries[1].level, Level::WARN);

        let activity = log.entries_for("activity");
        assert_eq!(activity.len(), 1);
    }
}
