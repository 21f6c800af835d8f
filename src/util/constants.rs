// LogWidget - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogWidget";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogWidget";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Widget defaults
// =============================================================================

/// Logger name used when neither the config file nor the CLI supplies one.
pub const DEFAULT_LOGGER_NAME: &str = "logwidget";

/// Severity threshold applied when none is configured.
pub const DEFAULT_THRESHOLD_NAME: &str = "INFO";

/// Extension appended to the logger name to build the default export path.
pub const EXPORT_FILE_EXTENSION: &str = "log";

/// Maximum length of a configured logger name.
pub const MAX_LOGGER_NAME_LEN: usize = 128;

/// Severity names accepted in config files and on the CLI (case-insensitive).
/// `WARN` and `FATAL` are aliases, matching the usual logging conventions.
pub const ACCEPTED_LEVEL_NAMES: &[&str] =
    &["DEBUG", "INFO", "WARNING", "WARN", "ERROR", "CRITICAL", "FATAL"];

// =============================================================================
// Record formatting
// =============================================================================

/// chrono format string used for the `[timestamp]` prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// UI
// =============================================================================

/// Repaint interval while idle so records emitted on other threads appear
/// without user interaction (ms).
pub const POLL_REPAINT_INTERVAL_MS: u64 = 100;

/// Maximum records drained from the bridge channel per poll. Anything left
/// over is picked up on the next frame so a log storm cannot stall the UI.
pub const MAX_RECORDS_PER_POLL: usize = 5_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level for the application's own stderr output.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Event target prefixes never forwarded to the widget: its own
/// diagnostics, and the GUI stack that logs while drawing every frame.
pub const BRIDGE_EXCLUDED_TARGETS: &[&str] = &[
    "logwidget",
    "eframe",
    "egui",
    "epaint",
    "emath",
    "winit",
    "wgpu",
    "naga",
    "glow",
    "glutin",
    "accesskit",
    "arboard",
    "calloop",
    "sctk",
    "smithay_client_toolkit",
    "rfd",
    "zbus",
];

// =============================================================================
// Files
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file size above which it is refused.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KB
