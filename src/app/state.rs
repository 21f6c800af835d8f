// LogWidget - app/state.rs
//
// Display controller state. Owns the record store, the severity filter,
// the formatting toggles and the rendered line for every stored record.
// Lives on the UI thread; the egui widget reads and mutates it.

use crate::app::bridge::{error_chain, BridgeReceiver, LogBridge};
use crate::core::export;
use crate::core::filter::{self, LevelFilter};
use crate::core::model::{LogRecord, RawEvent, Severity};
use crate::core::render::{self, FormatState, RenderedLine};
use crate::core::store::LogStore;
use crate::util::constants;
use crate::util::error::ExportError;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Construction-time settings for a logger widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetOptions {
    /// Logger name used for records logged through the widget itself and
    /// for the default export file name.
    pub name: String,

    /// Initial severity threshold.
    pub level: Severity,

    /// Target of "Save".
    pub export_path: PathBuf,

    /// Initial formatting toggles.
    pub format: FormatState,
}

impl WidgetOptions {
    /// Options for `name` with every other setting at its default.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            export_path: default_export_path(&name),
            name,
            level: Severity::default(),
            format: FormatState::default(),
        }
    }
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self::named(constants::DEFAULT_LOGGER_NAME)
    }
}

/// `<name>.log` in the working directory.
pub fn default_export_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.{}", constants::EXPORT_FILE_EXTENSION))
}

/// Controller state behind the logger widget.
#[derive(Debug)]
pub struct LoggerState {
    name: String,
    export_path: PathBuf,

    store: LogStore,

    /// Rendered line for every record in `store`, same indices.
    rendered: Vec<RenderedLine>,

    /// Indices into `store` of records passing the filter.
    visible: Vec<usize>,

    filter: LevelFilter,
    format: FormatState,

    bridge: LogBridge,
    receiver: BridgeReceiver,

    /// Status message for the widget's status line.
    pub status_message: String,

    /// Whether `status_message` reports a failure.
    pub status_is_error: bool,
}

impl LoggerState {
    /// Create the controller around an injected bridge/receiver pair.
    ///
    /// Events sent through any clone of `bridge` appear after the next
    /// [`poll`](Self::poll).
    pub fn new(options: WidgetOptions, bridge: LogBridge, receiver: BridgeReceiver) -> Self {
        tracing::debug!(
            name = %options.name,
            level = %options.level,
            export_path = %options.export_path.display(),
            "Logger widget created"
        );
        Self {
            name: options.name,
            export_path: options.export_path,
            store: LogStore::new(),
            rendered: Vec::new(),
            visible: Vec::new(),
            filter: LevelFilter::new(options.level),
            format: options.format,
            bridge,
            receiver,
            status_message: String::new(),
            status_is_error: false,
        }
    }

    /// Convenience constructor creating its own channel.
    pub fn with_options(options: WidgetOptions) -> Self {
        let (bridge, receiver) = LogBridge::channel();
        Self::new(options, bridge, receiver)
    }

    // -------------------------------------------------------------------------
    // Ingress
    // -------------------------------------------------------------------------

    /// Sender that external code (or a `tracing` subscriber) can use to feed
    /// this widget.
    pub fn bridge(&self) -> LogBridge {
        self.bridge.clone()
    }

    /// Move pending records from the bridge into the store.
    ///
    /// Returns the number of records appended.
    pub fn poll(&mut self) -> usize {
        let records = self.receiver.drain(constants::MAX_RECORDS_PER_POLL);
        let count = records.len();
        for record in records {
            self.append(record);
        }
        count
    }

    fn append(&mut self, record: LogRecord) {
        let line = render::render(&record, &self.format);
        let visible = self.filter.is_visible(&record);
        let idx = self.store.append(record);
        self.rendered.push(line);
        if visible {
            self.visible.push(idx);
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    pub fn level(&self) -> Severity {
        self.filter.threshold()
    }

    /// Set the threshold and recompute the full visible set.
    pub fn set_level(&mut self, level: Severity) {
        self.filter.set_threshold(level);
        self.apply_filter();
    }

    /// Set the threshold by name. Unknown names are ignored.
    pub fn set_level_by_name(&mut self, name: &str) {
        if self.filter.set_threshold_by_name(name) {
            self.apply_filter();
        } else {
            tracing::debug!(name, "Ignoring unknown level name");
        }
    }

    /// Level names offered to the user, least severe first.
    pub fn level_names(&self) -> Vec<&'static str> {
        Severity::all().iter().map(Severity::name).collect()
    }

    fn apply_filter(&mut self) {
        self.visible = filter::visible_indices(self.store.all(), &self.filter);
        tracing::debug!(
            threshold = %self.filter.threshold(),
            visible = self.visible.len(),
            total = self.store.count(),
            "Filter applied"
        );
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    pub fn format(&self) -> FormatState {
        self.format
    }

    /// Replace the formatting toggles and re-render every stored record.
    pub fn set_format(&mut self, format: FormatState) {
        if format == self.format {
            return;
        }
        self.format = format;
        self.rendered = self
            .store
            .all()
            .iter()
            .map(|record| render::render(record, &self.format))
            .collect();
    }

    pub fn set_colors(&mut self, on: bool) {
        self.set_format(FormatState {
            colorize: on,
            ..self.format
        });
    }

    pub fn set_show_name(&mut self, on: bool) {
        self.set_format(FormatState {
            show_name: on,
            ..self.format
        });
    }

    pub fn set_show_date(&mut self, on: bool) {
        self.set_format(FormatState {
            show_date: on,
            ..self.format
        });
    }

    pub fn set_show_location(&mut self, on: bool) {
        self.set_format(FormatState {
            show_location: on,
            ..self.format
        });
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Visible record and its rendered line at `row` of the filtered view.
    pub fn visible_row(&self, row: usize) -> Option<(&LogRecord, &RenderedLine)> {
        let idx = *self.visible.get(row)?;
        Some((self.store.get(idx)?, self.rendered.get(idx)?))
    }

    /// Visible records in store order.
    pub fn visible_records(&self) -> impl Iterator<Item = &LogRecord> + '_ {
        self.visible.iter().filter_map(|&idx| self.store.get(idx))
    }

    /// Rendered lines of the visible records, in store order.
    pub fn visible_lines(&self) -> impl Iterator<Item = &RenderedLine> + '_ {
        self.visible.iter().filter_map(|&idx| self.rendered.get(idx))
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn set_export_path(&mut self, path: impl Into<PathBuf>) {
        self.export_path = path.into();
    }

    /// Write the visible lines to the configured export path.
    pub fn save_log(&mut self) -> Result<usize, ExportError> {
        let path = self.export_path.clone();
        self.save_log_to(&path)
    }

    /// Write the visible lines to `path`, overwriting it.
    ///
    /// The outcome is also reported in `status_message`.
    pub fn save_log_to(&mut self, path: &Path) -> Result<usize, ExportError> {
        let result = export::export(path, self.visible_lines().map(|line| line.text.as_str()));
        match &result {
            Ok(count) => {
                self.status_message = format!("Saved {count} lines to {}", path.display());
                self.status_is_error = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save log file");
                self.status_message = e.to_string();
                self.status_is_error = true;
            }
        }
        result
    }

    // -------------------------------------------------------------------------
    // Delegation: log through the widget's own logger name
    // -------------------------------------------------------------------------

    /// Log `message` at `level` under the widget's name and show it at once.
    #[track_caller]
    pub fn log(&mut self, level: Severity, message: impl Into<String>) {
        let caller = Location::caller();
        let event = RawEvent::new(level, self.name.clone(), message)
            .with_location(caller.file(), caller.line());
        self.submit_now(event);
    }

    #[track_caller]
    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[track_caller]
    pub fn error(&mut self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[track_caller]
    pub fn critical(&mut self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }

    /// Log at ERROR with `err` and its cause chain attached as exception text.
    #[track_caller]
    pub fn exception(&mut self, message: impl Into<String>, err: &(dyn std::error::Error + 'static)) {
        let caller = Location::caller();
        let event = RawEvent::new(Severity::Error, self.name.clone(), message)
            .with_location(caller.file(), caller.line())
            .with_exception(error_chain(err));
        self.submit_now(event);
    }

    /// Queue `event` behind any backlog and drain until it is in the store.
    ///
    /// The channel is FIFO, so the first batch that comes back short of
    /// `MAX_RECORDS_PER_POLL` has emptied the queue past `event`.
    fn submit_now(&mut self, event: RawEvent) {
        self.bridge.submit(event);
        while self.poll() == constants::MAX_RECORDS_PER_POLL {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_all_levels(level: Severity) -> LoggerState {
        let mut state = LoggerState::with_options(WidgetOptions {
            level,
            ..WidgetOptions::named("test")
        });
        state.debug("This is a debug message");
        state.info("This is an info message");
        state.warning("This is a warning message");
        state.error("This is an error message");
        state.critical("This is a critical message");
        state
    }

    fn visible_levels(state: &LoggerState) -> Vec<Severity> {
        state.visible_records().map(|r| r.level).collect()
    }

    #[test]
    fn test_default_options() {
        let options = WidgetOptions::default();
        assert_eq!(options.name, "logwidget");
        assert_eq!(options.level, Severity::Info);
        assert_eq!(options.export_path, PathBuf::from("logwidget.log"));
        assert_eq!(options.format, FormatState::default());
    }

    #[test]
    fn test_error_threshold_shows_error_and_critical() {
        let state = state_with_all_levels(Severity::Error);
        assert_eq!(state.store().count(), 5);
        assert_eq!(visible_levels(&state), vec![Severity::Error, Severity::Critical]);
    }

    #[test]
    fn test_threshold_change_recomputes_visible_set() {
        let mut state = state_with_all_levels(Severity::Critical);
        assert_eq!(state.visible_count(), 1);

        state.set_level(Severity::Debug);
        assert_eq!(state.visible_count(), 5);

        state.set_level_by_name("warning");
        assert_eq!(
            visible_levels(&state),
            vec![Severity::Warning, Severity::Error, Severity::Critical]
        );
    }

    #[test]
    fn test_unknown_level_name_is_noop() {
        let mut state = state_with_all_levels(Severity::Warning);
        state.set_level_by_name("CHATTY");
        assert_eq!(state.level(), Severity::Warning);
        assert_eq!(
            state.level_names(),
            vec!["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
        );
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn test_store_order_unaffected_by_filter() {
        let state = state_with_all_levels(Severity::Critical);
        let levels: Vec<_> = state.store().all().iter().map(|r| r.level).collect();
        assert_eq!(levels, Severity::all().to_vec());
    }

    #[test]
    fn test_delegation_records_caller_location_and_name() {
        let mut state = LoggerState::with_options(WidgetOptions::named("worker"));
        state.info("started");
        let (record, line) = state.visible_row(0).unwrap();
        assert_eq!(record.logger_name, "worker");
        assert!(record.source_location.starts_with("state.rs:"), "{}", record.source_location);
        assert!(line.text.starts_with("[worker] ["));
        assert!(line.text.ends_with("INFO: started"));
    }

    #[test]
    fn test_format_change_rerenders_existing_records() {
        let mut state = state_with_all_levels(Severity::Debug);
        state.set_format(FormatState {
            show_name: false,
            show_date: false,
            show_location: false,
            colorize: true,
        });
        let texts: Vec<_> = state.visible_lines().map(|l| l.text.clone()).collect();
        assert_eq!(texts[0], "DEBUG: This is a debug message");
        assert_eq!(texts[4], "CRITICAL: This is a critical message");

        state.set_colors(false);
        assert!(state
            .visible_lines()
            .all(|l| l.foreground == render::NEUTRAL_COLOURS.foreground
                && l.background == render::NEUTRAL_COLOURS.background));
    }

    #[test]
    fn test_new_records_use_current_format() {
        let mut state = LoggerState::with_options(WidgetOptions::named("n"));
        state.set_show_name(false);
        state.set_show_date(false);
        state.set_show_location(false);
        state.warning("late");
        let (_, line) = state.visible_row(0).unwrap();
        assert_eq!(line.text, "WARNING: late");
    }

    #[test]
    fn test_exception_attaches_error_text() {
        let mut state = LoggerState::with_options(WidgetOptions::named("calc"));
        let err = "1/0".parse::<i32>().unwrap_err();
        state.exception("An error occurred", &err);

        let (record, _) = state.visible_row(0).unwrap();
        assert_eq!(record.level, Severity::Error);
        assert_eq!(record.message, "An error occurred\ninvalid digit found in string");
        assert!(!record.source_location.contains('\n'));
    }

    #[test]
    fn test_external_bridge_needs_poll() {
        let mut state = LoggerState::with_options(WidgetOptions::named("host"));
        let bridge = state.bridge();
        bridge.submit(RawEvent::new(Severity::Error, "other", "from elsewhere"));
        assert_eq!(state.store().count(), 0);

        assert_eq!(state.poll(), 1);
        assert_eq!(state.store().count(), 1);
        assert_eq!(state.store().all()[0].logger_name, "other");
    }

    #[test]
    fn test_delegated_record_visible_behind_large_backlog() {
        let mut state = LoggerState::with_options(WidgetOptions::named("busy"));
        let bridge = state.bridge();
        let backlog = constants::MAX_RECORDS_PER_POLL * 2 + 10;
        for i in 0..backlog {
            bridge.submit(RawEvent::new(Severity::Info, "worker", format!("queued {i}")));
        }

        state.warning("mine");

        assert_eq!(state.store().count(), backlog + 1);
        let last = state.visible_records().last().unwrap();
        assert_eq!(last.message, "mine");
        assert_eq!(last.logger_name, "busy");
    }

    #[test]
    fn test_save_log_writes_visible_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");

        let mut state = state_with_all_levels(Severity::Error);
        state.set_format(FormatState {
            show_name: false,
            show_date: false,
            show_location: false,
            colorize: true,
        });
        state.set_export_path(&path);
        let count = state.save_log().unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ERROR: This is an error message\nCRITICAL: This is a critical message\n"
        );
        assert!(state.status_message.contains("Saved 2 lines"));
    }

    #[test]
    fn test_save_log_failure_is_returned_and_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_all_levels(Severity::Debug);
        let bad = dir.path().join("no").join("such").join("dir.log");

        assert!(state.save_log_to(&bad).is_err());
        assert!(state.status_message.contains("Export I/O error"));
        assert!(state.status_is_error);
    }
}
