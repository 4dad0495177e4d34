//! Replay invariant: the history rebuilds the board exactly.

use super::super::{Board, Cell, GameEngine};
use super::Invariant;

/// Invariant: replaying the history onto an empty board yields the current
/// board, and no move in the history lands on an already marked cell.
pub struct ReplayMatchesBoardInvariant;

impl Invariant<GameEngine> for ReplayMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut rebuilt = Board::new();
        for mv in engine.history() {
            if !rebuilt.is_empty(mv.position()) {
                return false;
            }
            rebuilt.set(mv.position(), Cell::Occupied(mv.player()));
        }
        rebuilt == *engine.board()
    }

    fn description() -> &'static str {
        "Replaying history reproduces the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{EngineConfig, Player, Position};

    #[test]
    fn test_replay_holds() {
        let engine =
            GameEngine::replay(&[(0, 0), (1, 1), (0, 1)], EngineConfig::new()).unwrap();
        assert!(ReplayMatchesBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut engine = GameEngine::replay(&[(1, 1)], EngineConfig::new()).unwrap();
        engine
            .board_mut()
            .set(Position::Center, Cell::Occupied(Player::PlayerTwo));
        assert!(!ReplayMatchesBoardInvariant::holds(&engine));
    }
}
