//! User-configurable settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Settings file read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "rewind_tictactoe.toml";

/// Order of entries in the move list.
///
/// Defaults to [`SortOrder::Ascending`] (game start at the top).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// How the board and move list are shown.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Order of the move list.
    sort_order: SortOrder,
    /// Append `(col, row)` of each move to its history entry.
    show_coordinates: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Ascending,
            show_coordinates: true,
        }
    }
}

/// Where logs go and how verbose they are.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    level: String,
    /// Log file used by the terminal UI.
    file: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("rewind_tictactoe.log"),
        }
    }
}

/// All settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display preferences.
    display: DisplaySettings,
    /// Logging preferences.
    logging: LoggingSettings,
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if present,
    /// or falls back to defaults.
    ///
    /// Runs before logging is initialized, so it emits no events.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Loads settings from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Records the effective settings. Call once a subscriber is installed.
    pub fn log_loaded(&self) {
        info!(
            sort_order = self.display.sort_order.label(),
            show_coordinates = self.display.show_coordinates,
            log_level = %self.logging.level,
            "Settings loaded"
        );
    }

    /// Replaces the move list order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.display.sort_order = sort_order;
        self
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(*settings.display().sort_order(), SortOrder::Ascending);
        assert!(*settings.display().show_coordinates());
        assert_eq!(settings.logging().level(), "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("[display]\nsort_order = \"descending\"\n")
            .expect("valid toml");
        assert_eq!(*settings.display().sort_order(), SortOrder::Descending);
        assert!(*settings.display().show_coordinates());
        assert_eq!(settings.logging(), &LoggingSettings::default());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn test_loading_emits_no_events() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[display]\nsort_order = \"descending\"\n")
            .expect("write config");

        let logs = capture_logs(|| {
            Settings::load(Some(file.path())).expect("valid config");
            Settings::load(None).expect("defaults");
        });
        assert_eq!(logs, "");
    }

    #[test]
    fn test_log_loaded_reports_effective_settings() {
        let settings = Settings::default().with_sort_order(SortOrder::Descending);
        let logs = capture_logs(|| settings.log_loaded());
        assert!(logs.contains("Settings loaded"));
        assert!(logs.contains("sort_order=\"descending\""));
        assert!(logs.contains("show_coordinates=true"));
    }
}
