// LogWidget - ui/panels/mod.rs

pub mod controls;
pub mod log_list;
