//! Undo/redo policy for the game engine.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How undo and redo interact with turn order and game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Undo hands the turn back to the undone move's player and re-derives
    /// the status; redo is evaluated exactly like a fresh move.
    #[default]
    Restore,
    /// Undo and redo only touch the board and the two stacks. Current player
    /// and status keep whatever value they had.
    Legacy,
}

impl HistoryMode {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Restore => "restore",
            Self::Legacy => "legacy",
        }
    }
}

/// Engine-level policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Undo/redo semantics.
    history_mode: HistoryMode,

    /// Whether undo/redo stay available once the game is won or drawn.
    undo_when_finished: bool,
}

impl EngineConfig {
    /// Creates a config with the default policy.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the history mode.
    #[instrument]
    pub fn with_history_mode(mut self, history_mode: HistoryMode) -> Self {
        self.history_mode = history_mode;
        self
    }

    /// Allows or forbids undo/redo after the game ends.
    #[instrument]
    pub fn with_undo_when_finished(mut self, allowed: bool) -> Self {
        self.undo_when_finished = allowed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(*config.history_mode(), HistoryMode::Restore);
        assert!(!*config.undo_when_finished());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_history_mode(HistoryMode::Legacy)
            .with_undo_when_finished(true);
        assert_eq!(*config.history_mode(), HistoryMode::Legacy);
        assert!(*config.undo_when_finished());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig = toml::from_str("history_mode = \"legacy\"").unwrap();
        assert_eq!(*config.history_mode(), HistoryMode::Legacy);
        assert!(!*config.undo_when_finished());
    }
}
