//! Tic-tac-toe: board model, rules, and the undo/redo game engine.

mod action;
mod engine;
pub mod invariants;
mod policy;
mod position;
pub mod rules;
mod types;

pub use action::{EngineError, InvalidMove, Move};
pub use engine::{GameEngine, Snapshot};
pub use policy::{EngineConfig, HistoryMode};
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Phase, Player};
