//! User settings loaded from a TOML file.

use crate::games::tictactoe::EngineConfig;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Terminal UI timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long a transient notice stays on screen, in milliseconds.
    notice_ms: u64,

    /// Input poll interval, in milliseconds.
    tick_ms: u64,
}

#[instrument]
fn default_notice_ms() -> u64 {
    1500
}

#[instrument]
fn default_tick_ms() -> u64 {
    100
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notice_ms: default_notice_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl UiSettings {
    /// Notice lifetime as a [`Duration`].
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    /// Poll interval as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// All user-configurable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Undo/redo policy.
    engine: EngineConfig,

    /// Terminal UI timings.
    ui: UiSettings,
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys fall back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(
            history_mode = settings.engine.history_mode().label(),
            undo_when_finished = settings.engine.undo_when_finished(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` if given, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
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
    use crate::games::tictactoe::HistoryMode;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(*settings.ui().notice_ms(), 1500);
        assert_eq!(settings.ui().tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_full_toml() {
        let settings = Settings::from_toml(
            r#"
            [engine]
            history_mode = "legacy"
            undo_when_finished = true

            [ui]
            notice_ms = 500
            tick_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(*settings.engine().history_mode(), HistoryMode::Legacy);
        assert!(*settings.engine().undo_when_finished());
        assert_eq!(settings.ui().notice_duration(), Duration::from_millis(500));
        assert_eq!(*settings.ui().tick_ms(), 50);
    }

    #[test]
    fn test_bad_history_mode_rejected() {
        let err = Settings::from_toml("[engine]\nhistory_mode = \"sideways\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
