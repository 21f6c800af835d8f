// LogWidget - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogWidget configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logwidget/ or %APPDATA%\LogWidget\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of the default config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[widget]` section.
    pub widget: WidgetSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[widget]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct WidgetSection {
    /// Logger name.
    pub name: Option<String>,
    /// Initial severity threshold name.
    pub level: Option<String>,
    /// Export file path.
    pub export_path: Option<String>,
    /// Colourised lines.
    pub colors: Option<bool>,
    /// `[logger_name]` prefix.
    pub show_name: Option<bool>,
    /// `[timestamp]` prefix.
    pub show_date: Option<bool>,
    /// `[file:line]` prefix.
    pub show_location: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// `None` means "not configured"; callers apply their own defaults so that
/// CLI flags can still override the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    // -- Widget --
    pub name: Option<String>,
    /// Upper-cased, validated severity name.
    pub level: Option<String>,
    pub export_path: Option<PathBuf>,
    pub colors: Option<bool>,
    pub show_name: Option<bool>,
    pub show_date: Option<bool>,
    pub show_location: Option<bool>,

    // -- Logging --
    /// Logging level string (for stderr output).
    pub log_level: Option<String>,
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file yields defaults with no warnings. An unreadable
/// or unparseable file yields defaults with one warning; invalid individual
/// values are dropped with a warning each.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config file found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match read_limited(config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let e = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source,
            };
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config file");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

fn read_limited(path: &Path) -> Result<String, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }
    std::fs::read_to_string(path).map_err(io_err)
}

/// Validate each field, accumulating a warning for every rejected value.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig {
        colors: raw.widget.colors,
        show_name: raw.widget.show_name,
        show_date: raw.widget.show_date,
        show_location: raw.widget.show_location,
        ..AppConfig::default()
    };

    // -- Widget: name --
    if let Some(name) = raw.widget.name {
        let trimmed = name.trim();
        if !trimmed.is_empty() && trimmed.len() <= constants::MAX_LOGGER_NAME_LEN {
            config.name = Some(trimmed.to_string());
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[widget] name".to_string(),
                    value: name.clone(),
                    expected: format!(
                        "1-{} characters. Using default",
                        constants::MAX_LOGGER_NAME_LEN
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Widget: level --
    if let Some(level) = raw.widget.level {
        let upper = level.trim().to_ascii_uppercase();
        if constants::ACCEPTED_LEVEL_NAMES.contains(&upper.as_str()) {
            config.level = Some(upper);
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[widget] level".to_string(),
                    value: level.clone(),
                    expected: format!(
                        "one of {}. Using default ({})",
                        constants::ACCEPTED_LEVEL_NAMES.join(", "),
                        constants::DEFAULT_THRESHOLD_NAME
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Widget: export_path --
    if let Some(path) = raw.widget.export_path {
        if path.trim().is_empty() {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[widget] export_path".to_string(),
                    value: path,
                    expected: "a non-empty path. Using default (<name>.log)".to_string(),
                }
                .to_string(),
            );
        } else {
            config.export_path = Some(PathBuf::from(path));
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[logging] level".to_string(),
                    value: level,
                    expected: format!(
                        "one of {}. Using default ({})",
                        constants::VALID_LOG_LEVELS.join(", "),
                        constants::DEFAULT_LOG_LEVEL
                    ),
                }
                .to_string(),
            );
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_loaded() {
        let (_dir, path) = write_config(
            r#"
            [widget]
            name = "pipeline"
            level = "warn"
            export_path = "/tmp/pipeline.log"
            colors = false
            show_date = false

            [logging]
            level = "debug"

            [future]
            ignored = true
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.name.as_deref(), Some("pipeline"));
        assert_eq!(config.level.as_deref(), Some("WARN"));
        assert_eq!(config.export_path, Some(PathBuf::from("/tmp/pipeline.log")));
        assert_eq!(config.colors, Some(false));
        assert_eq!(config.show_date, Some(false));
        assert_eq!(config.show_name, None);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_are_dropped_with_warnings() {
        let (_dir, path) = write_config(
            r#"
            [widget]
            name = "   "
            level = "verbose"
            export_path = ""

            [logging]
            level = "loud"
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert_eq!(config, AppConfig::default());
        assert!(warnings.iter().any(|w| w.contains("[widget] level")));
    }

    #[test]
    fn test_unparseable_file_falls_back() {
        let (_dir, path) = write_config("[widget\nname = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_oversized_file_is_refused() {
        let padding = "#".repeat(constants::MAX_CONFIG_FILE_SIZE as usize + 1);
        let (_dir, path) = write_config(&padding);
        let (_, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("exceeds maximum"));
    }
}
