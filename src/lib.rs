//! Tic-tac-toe for two players on one machine.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn order and undo/redo history
//! - **Rules**: pure win/draw checks over a [`Board`]
//! - **Invariants**: properties asserted after every engine command
//! - **TUI**: a ratatui front end that drives the engine
//! - **Replay**: [`replay_report`] renders a move list without a terminal
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::started(EngineConfig::default());
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.apply_move(row, col)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::PlayerOne));
//!
//! engine.reset();
//! assert!(engine.history().is_empty());
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod replay;
pub mod tui;

// Crate-level exports - Settings
pub use config::{ConfigError, Settings, UiSettings};

// Crate-level exports - Headless replay
pub use replay::replay_report;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, EngineConfig, EngineError, GameEngine, GameStatus, HistoryMode, InvalidMove,
    Move, Phase, Player, Position, Snapshot,
};
