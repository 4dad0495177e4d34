//! Property tests: random command sequences against the engine.

use proptest::prelude::*;
use tictactoe_engine::games::tictactoe::invariants::{EngineInvariants, InvariantSet};
use tictactoe_engine::{Cell, EngineConfig, GameEngine, HistoryMode};

#[derive(Debug, Clone, Copy)]
enum Op {
    Move(usize, usize),
    Undo,
    Redo,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..4, 0usize..4).prop_map(|(r, c)| Op::Move(r, c)),
        2 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::Reset),
    ]
}

fn config() -> impl Strategy<Value = EngineConfig> {
    (
        prop_oneof![Just(HistoryMode::Restore), Just(HistoryMode::Legacy)],
        any::<bool>(),
    )
        .prop_map(|(mode, undo_when_finished)| {
            EngineConfig::new()
                .with_history_mode(mode)
                .with_undo_when_finished(undo_when_finished)
        })
}

/// Runs `op`, returning whether it succeeded.
fn run(engine: &mut GameEngine, op: Op) -> bool {
    match op {
        Op::Move(r, c) => engine.apply_move(r, c).is_ok(),
        Op::Undo => engine.undo().is_ok(),
        Op::Redo => engine.redo().is_ok(),
        Op::Reset => {
            engine.reset();
            true
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(
        config in config(),
        ops in prop::collection::vec(op(), 0..40)
    ) {
        let mut engine = GameEngine::started(config);
        for op in ops {
            run(&mut engine, op);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn failed_commands_change_nothing(
        config in config(),
        ops in prop::collection::vec(op(), 0..40)
    ) {
        let mut engine = GameEngine::started(config);
        for op in ops {
            let before = engine.clone();
            if !run(&mut engine, op) {
                prop_assert_eq!(&engine, &before);
            }
        }
    }

    #[test]
    fn move_marks_cell_with_mover(
        ops in prop::collection::vec(op(), 0..20),
        row in 0usize..3,
        col in 0usize..3
    ) {
        let mut engine = GameEngine::started(EngineConfig::default());
        for op in ops {
            run(&mut engine, op);
        }
        let mover = engine.current_player();
        if engine.apply_move(row, col).is_ok() {
            prop_assert_eq!(engine.cell_at(row, col), Some(Cell::Occupied(mover)));
        }
    }

    #[test]
    fn undo_then_redo_round_trips(
        ops in prop::collection::vec(op(), 0..20),
        row in 0usize..3,
        col in 0usize..3
    ) {
        let mut engine = GameEngine::started(EngineConfig::default().with_undo_when_finished(true));
        for op in ops {
            run(&mut engine, op);
        }

        let before_move = engine.clone();
        if engine.apply_move(row, col).is_ok() {
            let after_move = engine.clone();

            engine.undo().unwrap();
            prop_assert_eq!(engine.board(), before_move.board());
            prop_assert_eq!(engine.current_player(), before_move.current_player());
            prop_assert_eq!(engine.status(), before_move.status());
            prop_assert_eq!(engine.history(), before_move.history());

            engine.redo().unwrap();
            prop_assert_eq!(engine.board(), after_move.board());
            prop_assert_eq!(engine.current_player(), after_move.current_player());
            prop_assert_eq!(engine.status(), after_move.status());
            prop_assert_eq!(engine.history(), after_move.history());
        }
    }

    #[test]
    fn new_move_clears_redo(
        config in config(),
        ops in prop::collection::vec(op(), 0..30),
        row in 0usize..3,
        col in 0usize..3
    ) {
        let mut engine = GameEngine::started(config);
        for op in ops {
            run(&mut engine, op);
        }
        if engine.apply_move(row, col).is_ok() {
            prop_assert!(engine.redo_stack().is_empty());
            prop_assert!(!engine.can_redo());
        }
    }
}
