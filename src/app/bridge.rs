// LogWidget - app/bridge.rs
//
// Logging bridge: turns events emitted by a logging facility into
// `LogRecord`s and hands them to the display thread.
//
// Architecture:
//   - `LogBridge` is the sending half of an mpsc channel. It is cheap to
//     clone and may be used from any thread.
//   - `BridgeReceiver` lives on the UI thread next to the store. The UI
//     drains it each frame (same pattern as the other poll loops), so the
//     store is only ever mutated on one thread.
//   - `LogBridge` is also a `tracing_subscriber::Layer`, so it can sit in
//     the global subscriber alongside the stderr formatter.

use crate::core::model::{LogRecord, RawEvent, Severity};
use crate::util::constants::TIMESTAMP_FORMAT;
use crate::util::error::BridgeError;
use crate::util::logging::bridge_filter;
use std::fmt::Write as _;
use std::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Name of the optional event field that overrides the mapped severity,
/// e.g. `tracing::error!(severity = "CRITICAL", "...")`.
pub const SEVERITY_FIELD: &str = "severity";

/// Event fields treated as exception information.
pub const EXCEPTION_FIELDS: &[&str] = &["exception", "error"];

/// Prefix of the fields tracing-log attaches to forwarded `log` records.
/// Their content is recovered through the normalized metadata instead.
const LOG_FIELD_PREFIX: &str = "log.";

// =============================================================================
// Channel halves
// =============================================================================

/// Sending half: receives events from the logging facility.
#[derive(Debug, Clone)]
pub struct LogBridge {
    tx: mpsc::Sender<LogRecord>,
}

/// Receiving half, owned by the display controller.
#[derive(Debug)]
pub struct BridgeReceiver {
    rx: mpsc::Receiver<LogRecord>,
}

impl LogBridge {
    /// Create a connected bridge/receiver pair.
    pub fn channel() -> (LogBridge, BridgeReceiver) {
        let (tx, rx) = mpsc::channel();
        (LogBridge { tx }, BridgeReceiver { rx })
    }

    /// Convert a raw event into a record and queue it for display.
    ///
    /// Never fails: if the receiving side is gone the record is dropped.
    pub fn submit(&self, event: RawEvent) {
        let record = to_record(event);
        // A dropped receiver means the widget is gone; nothing left to show.
        let _ = self.tx.send(record);
    }
}

impl BridgeReceiver {
    /// Drain up to `max` pending records without blocking.
    pub fn drain(&self, max: usize) -> Vec<LogRecord> {
        self.rx.try_iter().take(max).collect()
    }
}

/// Install `bridge` as the only layer of the global default subscriber,
/// behind the same target filter `util::logging::init` uses.
///
/// Fails when a global subscriber has already been set. Hosts that want
/// stderr output as well should use `util::logging::init` instead.
pub fn attach(bridge: LogBridge) -> Result<(), BridgeError> {
    tracing_subscriber::registry()
        .with(bridge.with_filter(bridge_filter()))
        .try_init()
        .map_err(|source| BridgeError::AlreadyInstalled { source })
}

// =============================================================================
// Field extraction
// =============================================================================

/// Builds a record from a raw event.
///
/// With exception information present, the timestamp and location strings
/// are cut to their first line so trace text can never leak into the
/// single-line prefix fields, and the exception text is appended to the
/// message on its own line.
pub fn to_record(event: RawEvent) -> LogRecord {
    let mut timestamp = event.time.format(TIMESTAMP_FORMAT).to_string();
    let mut location = match (&event.file, event.line) {
        (Some(file), Some(line)) => format!("{}:{line}", file_basename(file)),
        (Some(file), None) => file_basename(file).to_string(),
        _ => String::new(),
    };

    let mut message = event.message;
    if let Some(exception) = event.exception {
        timestamp = first_line(&timestamp).to_string();
        location = first_line(&location).to_string();
        if !exception.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&exception);
        }
    }

    LogRecord {
        message,
        level: event.level,
        logger_name: event.logger_name,
        timestamp,
        source_location: location,
    }
}

fn first_line(s: &str) -> &str {
    s.split('\n').next().unwrap_or_default()
}

/// File name without directories; handles both separators since call-site
/// paths are recorded in the compiling host's style.
fn file_basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

// =============================================================================
// tracing integration
// =============================================================================

/// Collects the fields of one `tracing` event.
#[derive(Default)]
struct EventVisitor {
    message: String,
    extra: String,
    severity: Option<Severity>,
    exception: Option<String>,
}

impl EventVisitor {
    fn record_value(&mut self, field: &Field, value: String) {
        let name = field.name();
        if name == "message" {
            self.message = value;
        } else if name == SEVERITY_FIELD {
            // Unknown names fall back to the mapped tracing level.
            if let Some(level) = Severity::from_name(&value) {
                self.severity = Some(level);
            }
        } else if EXCEPTION_FIELDS.contains(&name) {
            self.exception = Some(value);
        } else if !name.starts_with(LOG_FIELD_PREFIX) {
            let _ = write!(self.extra, " {name}={value}");
        }
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record_value(field, error_chain(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }
}

/// Renders an error followed by its `source()` chain, one cause per line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let _ = write!(text, "\nCaused by: {inner}");
        cause = inner.source();
    }
    text
}

impl<S> Layer<S> for LogBridge
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // `log` records arrive on a shared tracing-log callsite; their real
        // target and call site only exist in the normalized metadata.
        let normalized = event.normalized_metadata();
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut message = visitor.message;
        message.push_str(&visitor.extra);

        let level = visitor
            .severity
            .unwrap_or_else(|| Severity::from_tracing(metadata.level()));

        let mut raw = RawEvent::new(level, metadata.target(), message);
        raw.file = metadata.file().map(str::to_string);
        raw.line = metadata.line();
        raw.exception = visitor.exception;

        self.submit(raw);
    }
}
