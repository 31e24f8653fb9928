//! Console Logger
//!
//! A `tracing` layer for the browser. Every event is written to the
//! devtools console (stderr when running natively) and the most recent
//! records are kept in a circular buffer.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Records kept by [`init`]
pub const DEFAULT_CAPACITY: usize = 500;

/// One captured event
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    pub fn format_line(&self) -> String {
        format!(
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared circular buffer of recent records
#[derive(Debug, Clone)]
pub struct LogBuffer {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Append a record, evicting the oldest one when full
    pub fn push(&self, record: LogRecord) {
        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Copy of the buffered records, oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    /// Formatted lines of the last `count` records, oldest first
    pub fn recent_lines(&self, count: usize) -> Vec<String> {
        let records = self.lock();
        let skip = records.len().saturating_sub(count);
        records.iter().skip(skip).map(LogRecord::format_line).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Layer that formats events and stores them in a [`LogBuffer`]
pub struct ConsoleLayer {
    buffer: LogBuffer,
    echo: bool,
}

impl ConsoleLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, echo: true }
    }

    /// Disable writing to the console; records are only buffered
    pub fn without_echo(mut self) -> Self {
        self.echo = false;
        self
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let record = LogRecord {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };

        if self.echo {
            write_console(&record);
        }
        self.buffer.push(record);
    }
}

/// Collects the `message` field plus `key=value` pairs for the rest
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {}", self.message, fields)
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

#[cfg(target_arch = "wasm32")]
fn write_console(record: &LogRecord) {
    use wasm_bindgen::JsValue;

    let line = JsValue::from_str(&record.format_line());
    match record.level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(record: &LogRecord) {
    eprintln!("{}", record.format_line());
}

/// Install the console layer as the global subscriber.
///
/// Returns the buffer the layer writes into. Fails if a global
/// subscriber is already set.
pub fn init(max_level: Level) -> Result<LogBuffer, String> {
    let buffer = LogBuffer::new(DEFAULT_CAPACITY);
    let layer = ConsoleLayer::new(buffer.clone()).with_filter(LevelFilter::from_level(max_level));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    Ok(buffer)
}
