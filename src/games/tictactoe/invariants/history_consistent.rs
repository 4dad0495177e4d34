//! History consistency invariant: history length matches occupied cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: history length equals the number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().len() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, EngineConfig, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::default();
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_moves_and_undo_hold() {
        let mut engine =
            GameEngine::replay(&[(0, 0), (1, 1), (0, 2), (2, 0)], EngineConfig::new()).unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
        engine.undo().unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 3);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut engine = GameEngine::replay(&[(1, 1)], EngineConfig::new()).unwrap();
        engine
            .board_mut()
            .set(Position::TopLeft, Cell::Occupied(Player::PlayerTwo));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
