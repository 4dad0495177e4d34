//! Redo invariant: undone moves can always be re-applied.

use super::super::GameEngine;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every move on the redo stack targets a distinct, empty cell.
pub struct RedoTargetsEmptyInvariant;

impl Invariant<GameEngine> for RedoTargetsEmptyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut seen = HashSet::new();
        engine
            .redo_stack()
            .iter()
            .all(|mv| engine.board().is_empty(mv.position()) && seen.insert(mv.position()))
    }

    fn description() -> &'static str {
        "Redo stack targets distinct empty cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, EngineConfig, Player, Position};

    #[test]
    fn test_after_undos_holds() {
        let mut engine =
            GameEngine::replay(&[(0, 0), (1, 1), (2, 2)], EngineConfig::new()).unwrap();
        engine.undo().unwrap();
        engine.undo().unwrap();
        assert_eq!(engine.redo_stack().len(), 2);
        assert!(RedoTargetsEmptyInvariant::holds(&engine));
    }

    #[test]
    fn test_marked_redo_target_violates() {
        let mut engine = GameEngine::replay(&[(0, 0), (1, 1)], EngineConfig::new()).unwrap();
        engine.undo().unwrap();
        engine
            .board_mut()
            .set(Position::Center, Cell::Occupied(Player::PlayerOne));
        assert!(!RedoTargetsEmptyInvariant::holds(&engine));
    }
}
