// LogWidget - core/filter.rs
//
// Severity threshold filter.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{LogRecord, Severity};

/// Severity threshold state. A record is visible when its level is at or
/// above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelFilter {
    threshold: Severity,
}

impl LevelFilter {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Changes the threshold. Any previously computed visible set is stale
    /// afterwards; recompute it with [`visible_indices`].
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Changes the threshold by level name. Unknown names leave the
    /// threshold untouched and return false.
    pub fn set_threshold_by_name(&mut self, name: &str) -> bool {
        match Severity::from_name(name) {
            Some(level) => {
                self.threshold = level;
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, record: &LogRecord) -> bool {
        record.level >= self.threshold
    }
}

/// Apply the filter to a slice of records, returning indices of visible
/// records in store order.
///
/// Returns indices rather than copies so the display can map rows back to
/// the store and its rendered lines.
pub fn visible_indices(records: &[LogRecord], filter: &LevelFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.is_visible(record))
        .map(|(idx, _)| idx)
        .collect()
}
