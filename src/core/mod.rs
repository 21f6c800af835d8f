// LogWidget - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono, tracing (level type only),
// util (errors, constants).
// Must NOT depend on: ui, platform, app, or any GUI crate.

pub mod export;
pub mod filter;
pub mod model;
pub mod render;
pub mod store;
