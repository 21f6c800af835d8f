// LogWidget - main.rs
//
// Demo entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation, with the widget's bridge as an extra layer
// 3. config.toml loading, CLI overrides on top
// 4. Sample records, then eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

pub use logwidget::app;
pub use logwidget::core;
pub use logwidget::platform;
pub use logwidget::ui;
pub use logwidget::util;

use crate::app::bridge::LogBridge;
use crate::app::state::{default_export_path, LoggerState, WidgetOptions};
use crate::core::model::Severity;
use crate::core::render::FormatState;
use crate::platform::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// LogWidget - real-time log viewer widget demo.
///
/// Opens a window showing application log records with level filtering,
/// colourised severities and export to file.
#[derive(Parser, Debug)]
#[command(name = "LogWidget", version, about)]
struct Cli {
    /// Logger name (also names the default export file).
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Initial severity threshold (DEBUG, INFO, WARNING, ERROR, CRITICAL).
    #[arg(short = 'l', long = "level")]
    level: Option<String>,

    /// File written by "Save" (default: <name>.log).
    #[arg(short = 'o', long = "export-path")]
    export_path: Option<PathBuf>,

    /// Start with colourised lines switched off.
    #[arg(long = "no-colors")]
    no_colors: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Merge defaults, config file and CLI flags (highest priority last).
fn resolve_options(cli: &Cli, config: &AppConfig) -> WidgetOptions {
    let name = cli
        .name
        .clone()
        .or_else(|| config.name.clone())
        .unwrap_or_else(|| crate::util::constants::DEFAULT_LOGGER_NAME.to_string());

    let level_name = cli.level.as_deref().or(config.level.as_deref());
    let level = match level_name {
        Some(name) => Severity::from_name(name).unwrap_or_else(|| {
            tracing::warn!(requested = name, "Unknown level name; using default");
            Severity::default()
        }),
        None => Severity::default(),
    };

    let export_path = cli
        .export_path
        .clone()
        .or_else(|| config.export_path.clone())
        .unwrap_or_else(|| default_export_path(&name));

    let defaults = FormatState::default();
    let format = FormatState {
        show_name: config.show_name.unwrap_or(defaults.show_name),
        show_date: config.show_date.unwrap_or(defaults.show_date),
        show_location: config.show_location.unwrap_or(defaults.show_location),
        colorize: !cli.no_colors && config.colors.unwrap_or(defaults.colorize),
    };

    WidgetOptions {
        name,
        level,
        export_path,
        format,
    }
}

/// Emit one record per severity plus an exception, like a host would.
fn emit_samples(state: &mut LoggerState) {
    state.debug("This is a debug message");
    state.info("This is an info message");
    state.warning("This is a warning message");
    state.error("This is an error message");
    state.critical("This is a critical message");
    state.log(Severity::Info, "Custom log message");

    if let Err(e) = "1/0".parse::<i32>() {
        state.exception(format!("An error occurred: {e}"), &e);
    }

    // Through the global subscriber, as any host module would. The widget's
    // own `logwidget` target is kept out of its store.
    tracing::info!(target: "demo", widget = state.name(), "Sample records emitted");
}

fn setup(cli: &Cli) -> crate::util::error::Result<LoggerState> {
    let (bridge, receiver) = LogBridge::channel();

    // Config is read before logging is up so its level can apply; warnings
    // are reported once the subscriber exists.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| crate::platform::config::PlatformPaths::resolve().config_file());
    let (config, warnings) = crate::platform::config::load_config(&config_path);

    crate::util::logging::init(cli.debug, config.log_level.as_deref(), Some(bridge.clone()))?;

    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = crate::util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "LogWidget starting"
    );

    let options = resolve_options(cli, &config);
    Ok(LoggerState::new(options, bridge, receiver))
}

fn main() {
    let cli = Cli::parse();

    let mut state = match setup(&cli) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    emit_samples(&mut state);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                crate::util::constants::APP_NAME,
                crate::util::constants::APP_VERSION
            ))
            .with_inner_size([700.0, 400.0])
            .with_min_inner_size([400.0, 200.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        crate::util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LogWidgetApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogWidget GUI: {e}");
        std::process::exit(1);
    }
}
