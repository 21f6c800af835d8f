// LogWidget - lib.rs
//
// Library entry point. The core layer (records, store, filter, renderer,
// exporter) is usable without any GUI; the `ui` module provides the egui
// widget drawn on top of `app::state::LoggerState`.
//
// The eframe demo application lives in `main.rs`/`gui.rs` and is not part
// of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
