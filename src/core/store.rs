// LogWidget - core/store.rs
//
// Append-only record store. Insertion order is the only ordering; records
// are never removed, only hidden by the filter.

use crate::core::model::LogRecord;

/// Ordered, append-only collection of captured records.
#[derive(Debug, Default)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its index.
    pub fn append(&mut self, record: LogRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// All records in insertion order, regardless of any filter.
    pub fn all(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Severity;

    #[test]
    fn test_append_preserves_order() {
        let mut store = LogStore::new();
        let levels = [
            Severity::Critical,
            Severity::Debug,
            Severity::Warning,
            Severity::Info,
        ];
        for (i, level) in levels.iter().enumerate() {
            let idx = store.append(LogRecord::new(format!("msg {i}"), *level, "", "", ""));
            assert_eq!(idx, i);
        }

        assert_eq!(store.count(), 4);
        let messages: Vec<_> = store.all().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["msg 0", "msg 1", "msg 2", "msg 3"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = LogStore::new();
        store.append(LogRecord::new("same", Severity::Info, "", "", ""));
        store.append(LogRecord::new("same", Severity::Error, "", "", ""));
        assert_eq!(store.count(), 2);
        assert_eq!(store.get(1).map(|r| r.level), Some(Severity::Error));
        assert!(store.get(2).is_none());
    }
}
