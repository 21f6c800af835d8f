// LogWidget - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, compact format. An optional extra layer (the widget's
// log bridge) is installed next to it. That layer sees every level, since
// the widget applies its own severity threshold, but not the targets in
// `BRIDGE_EXCLUDED_TARGETS`.

use crate::util::constants::BRIDGE_EXCLUDED_TARGETS;
use crate::util::error::BridgeError;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Build the stderr filter.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
fn stderr_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Per-layer filter for the widget's bridge: all levels, minus the widget's
/// own diagnostics and the GUI stack.
pub fn bridge_filter() -> Targets {
    BRIDGE_EXCLUDED_TARGETS
        .iter()
        .fold(Targets::new().with_default(LevelFilter::TRACE), |targets, &target| {
            targets.with_target(target, LevelFilter::OFF)
        })
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `extra` is an additional layer, typically the widget's `LogBridge`; it
/// is wrapped in `bridge_filter()`.
///
/// Fails when a global subscriber has already been installed.
pub fn init<L>(
    debug_flag: bool,
    config_level: Option<&str>,
    extra: Option<L>,
) -> Result<(), BridgeError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(stderr_filter(debug_flag, config_level));

    tracing_subscriber::registry()
        .with(extra.map(|layer| layer.with_filter(bridge_filter())))
        .with(stderr_layer)
        .try_init()
        .map_err(|source| BridgeError::AlreadyInstalled { source })?;

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
    Ok(())
}
