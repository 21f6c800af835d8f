// LogWidget - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Local};
use std::hash::{Hash, Hasher};

// =============================================================================
// Severity
// =============================================================================

/// Severity levels, ordered from least to most severe.
///
/// Each level carries the conventional integer value (10, 20, ... 50) so
/// that `a >= b` on severities matches `a.value() >= b.value()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Returns all variants in ascending order of severity.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Critical,
        ]
    }

    /// Canonical upper-case name, as printed in rendered lines.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Integer severity. Higher is more severe.
    pub fn value(&self) -> u8 {
        match self {
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
            Severity::Critical => 50,
        }
    }

    /// Looks up a severity by name, case-insensitively.
    ///
    /// `WARN` and `FATAL` are accepted as aliases. Returns `None` for
    /// anything else.
    pub fn from_name(name: &str) -> Option<Severity> {
        match name.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Severity::Debug),
            "INFO" => Some(Severity::Info),
            "WARNING" | "WARN" => Some(Severity::Warning),
            "ERROR" => Some(Severity::Error),
            "CRITICAL" | "FATAL" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Maps a `tracing` level. TRACE folds into DEBUG; there is no
    /// tracing level for CRITICAL.
    pub fn from_tracing(level: &tracing::Level) -> Severity {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Raw event (bridge ingress)
// =============================================================================

/// An event as emitted by a logging facility, before field extraction.
#[derive(Debug, Clone)]
pub struct RawEvent {
    /// Fully formatted message text.
    pub message: String,

    /// Severity of the event.
    pub level: Severity,

    /// Name of the emitting logger (a `tracing` target, or the widget name).
    pub logger_name: String,

    /// Wall-clock time at which the event was emitted.
    pub time: DateTime<Local>,

    /// Source file of the call site, if known. May include directories.
    pub file: Option<String>,

    /// Source line of the call site, if known.
    pub line: Option<u32>,

    /// Exception/traceback text attached to the event, if any.
    pub exception: Option<String>,
}

impl RawEvent {
    /// Creates an event stamped with the current local time and no
    /// location or exception information.
    pub fn new(level: Severity, logger_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            logger_name: logger_name.into(),
            time: Local::now(),
            file: None,
            line: None,
            exception: None,
        }
    }

    /// Attaches the call-site location.
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Attaches exception/traceback text.
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }
}

// =============================================================================
// Log record
// =============================================================================

/// One captured log line. Immutable once created.
///
/// Equality and hashing consider `message` only: two records with the same
/// text are the same record for de-duplication purposes, even when their
/// severity or origin differ.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Message text, including any appended exception text.
    pub message: String,

    /// Severity of the record.
    pub level: Severity,

    /// Name of the emitting logger. May be empty.
    pub logger_name: String,

    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`. May be empty.
    pub timestamp: String,

    /// `filename:line` of the call site. May be empty.
    pub source_location: String,
}

impl LogRecord {
    pub fn new(
        message: impl Into<String>,
        level: Severity,
        logger_name: impl Into<String>,
        timestamp: impl Into<String>,
        source_location: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            level,
            logger_name: logger_name.into(),
            timestamp: timestamp.into(),
            source_location: source_location.into(),
        }
    }
}

impl PartialEq for LogRecord {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for LogRecord {}

impl Hash for LogRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_severity_order_matches_values() {
        let all = Severity::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_from_name_accepts_aliases_and_case() {
        assert_eq!(Severity::from_name("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("Fatal"), Some(Severity::Critical));
        assert_eq!(Severity::from_name(" error "), Some(Severity::Error));
        assert_eq!(Severity::from_name("VERBOSE"), None);
        assert_eq!(Severity::from_name(""), None);
    }

    #[test]
    fn test_from_tracing_folds_trace_into_debug() {
        assert_eq!(Severity::from_tracing(&tracing::Level::TRACE), Severity::Debug);
        assert_eq!(Severity::from_tracing(&tracing::Level::WARN), Severity::Warning);
    }

    #[test]
    fn test_records_with_same_message_are_equal() {
        let a = LogRecord::new("disk full", Severity::Warning, "app", "", "");
        let b = LogRecord::new("disk full", Severity::Critical, "other", "2024-01-01 00:00:00", "x.rs:1");
        let c = LogRecord::new("disk ok", Severity::Warning, "app", "", "");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
