// LogWidget - app/mod.rs
//
// Application layer: the logging bridge and the display controller state.
// Dependencies: core layer, tracing.
// Must NOT depend on: ui, platform specifics.

pub mod bridge;
pub mod state;
