//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events: once recorded in the history they are never
//! edited, only popped by undo and pushed back by redo.

use super::{Player, Position};
use derive_more::{Display, Error, From};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The position where the player places their mark.
    position: Position,
    /// The player making the move.
    player: Player,
}

impl Move {
    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Row of the marked cell.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the marked cell.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected before touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The coordinates are off the 3x3 board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Error returned by engine commands. State is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The target cell is occupied or out of range.
    #[display("Invalid move: {}", _0)]
    #[error(ignore)]
    #[from]
    InvalidMove(InvalidMove),

    /// History is empty.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// Redo stack is empty.
    #[display("Nothing to redo")]
    NothingToRedo,

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The engine has not been started.
    #[display("Game has not started")]
    NotStarted,
}
