//! Tic-tac-toe game engine with undo/redo history.
//!
//! The engine owns all game state. Callers go through the command surface
//! ([`GameEngine::apply_move`], [`GameEngine::undo`], [`GameEngine::redo`],
//! [`GameEngine::reset`]) and read back through the query surface; the board
//! is never handed out mutably.

use super::action::{EngineError, InvalidMove, Move};
use super::invariants;
use super::policy::{EngineConfig, HistoryMode};
use super::rules;
use super::types::{Board, Cell, GameStatus, Phase, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
    /// Most recently undone move last.
    redo_stack: Vec<Move>,
    started: bool,
    config: EngineConfig,
}

impl GameEngine {
    /// Creates an idle engine: empty board, player one to move.
    ///
    /// Moves are rejected with [`EngineError::NotStarted`] until
    /// [`start`](Self::start) or [`reset`](Self::reset) is called.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::PlayerOne,
            status: GameStatus::InProgress,
            history: Vec::new(),
            redo_stack: Vec::new(),
            started: false,
            config,
        }
    }

    /// Creates an engine that is already accepting moves.
    #[instrument]
    pub fn started(config: EngineConfig) -> Self {
        let mut engine = Self::new(config);
        engine.start();
        engine
    }

    /// Starts the game. No-op if already started.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if !self.started {
            info!("Game started");
            self.started = true;
        }
    }

    /// Applies each `(row, col)` in turn to a freshly started engine.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`apply_move`](Self::apply_move).
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[(usize, usize)], config: EngineConfig) -> Result<Self, EngineError> {
        let mut engine = Self::started(config);
        for &(row, col) in moves {
            engine.apply_move(row, col)?;
        }
        Ok(engine)
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the status after the move. On a win or draw the turn does not
    /// pass to the other player.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotStarted`] before the game starts
    /// - [`EngineError::GameOver`] once the game is won or drawn
    /// - [`EngineError::InvalidMove`] for an occupied or off-board cell
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, EngineError> {
        let pos = Position::from_row_col(row, col)
            .ok_or(EngineError::from(InvalidMove::OutOfRange { row, col }));
        match pos {
            Ok(pos) => self.place(pos),
            Err(err) => {
                self.check_accepting_moves()?;
                warn!(%err, "Move rejected");
                Err(err)
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Same semantics as [`apply_move`](Self::apply_move).
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, EngineError> {
        self.check_accepting_moves()?;

        if !self.board.is_empty(pos) {
            let err = EngineError::from(InvalidMove::Occupied(pos));
            warn!(%err, "Move rejected");
            return Err(err);
        }

        let mv = Move::new(pos, self.current_player);
        self.board.set(pos, Cell::Occupied(mv.player()));
        self.history.push(mv);
        self.redo_stack.clear();
        self.settle_after_placement(mv.player());

        debug!(%mv, status = %self.status, "Move applied");
        if let Some(winner) = self.status.winner() {
            info!(%winner, moves = self.history.len(), "Game won");
        } else if self.status == GameStatus::Draw {
            info!("Game drawn");
        }
        invariants::assert_invariants(self);
        Ok(self.status)
    }

    /// Takes back the most recent move and pushes it onto the redo stack.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game is finished and the policy
    ///   forbids undo after the end
    /// - [`EngineError::NothingToUndo`] if the history is empty
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, EngineError> {
        self.check_history_allowed()?;
        let Some(mv) = self.history.pop() else {
            debug!("Undo with empty history");
            return Err(EngineError::NothingToUndo);
        };

        self.board.clear(mv.position());
        self.redo_stack.push(mv);

        if *self.config.history_mode() == HistoryMode::Restore {
            self.current_player = mv.player();
            self.status = self.derive_status();
        }

        debug!(%mv, status = %self.status, "Move undone");
        invariants::assert_invariants(self);
        Ok(mv)
    }

    /// Re-applies the most recently undone move with its original player.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game is finished and the policy
    ///   forbids redo after the end
    /// - [`EngineError::NothingToRedo`] if nothing has been undone since the
    ///   last new move
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, EngineError> {
        self.check_history_allowed()?;
        let Some(mv) = self.redo_stack.pop() else {
            debug!("Redo with empty redo stack");
            return Err(EngineError::NothingToRedo);
        };

        self.board.set(mv.position(), Cell::Occupied(mv.player()));
        self.history.push(mv);

        if *self.config.history_mode() == HistoryMode::Restore {
            self.current_player = mv.player();
            self.settle_after_placement(mv.player());
        }

        debug!(%mv, status = %self.status, "Move redone");
        invariants::assert_invariants(self);
        Ok(mv)
    }

    /// Clears the board and both stacks and starts a fresh game with
    /// player one to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::PlayerOne;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.redo_stack.clear();
        self.started = true;
        info!("Game reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.board.get(pos))
    }

    /// True iff `(row, col)` is on the board and empty.
    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col) == Some(Cell::Empty)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// True iff `player` holds a complete line.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(&self.board, player)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the lifecycle phase, `Idle` before the game starts.
    pub fn phase(&self) -> Phase {
        if self.started {
            self.status.into()
        } else {
            Phase::Idle
        }
    }

    /// Whether the game has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Undone moves, most recently undone last.
    pub fn redo_stack(&self) -> &[Move] {
        &self.redo_stack
    }

    /// Whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && self.check_history_allowed().is_ok()
    }

    /// Whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty() && self.check_history_allowed().is_ok()
    }

    /// Returns the engine policy.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Captures the full engine state for serialization.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            phase: self.phase(),
            history: self.history.clone(),
            redo_stack: self.redo_stack.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Direct board access for corrupting state in invariant tests.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn check_accepting_moves(&self) -> Result<(), EngineError> {
        if !self.started {
            warn!("Move before game start");
            return Err(EngineError::NotStarted);
        }
        if self.status.is_finished() {
            warn!(status = %self.status, "Move after game over");
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    fn check_history_allowed(&self) -> Result<(), EngineError> {
        if self.status.is_finished() && !*self.config.undo_when_finished() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    /// Win beats draw; only a non-terminal move passes the turn.
    fn settle_after_placement(&mut self, mover: Player) {
        if rules::check_win(&self.board, mover) {
            self.status = GameStatus::Won(mover);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.status = GameStatus::InProgress;
            self.current_player = mover.opponent();
        }
    }

    fn derive_status(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::is_draw(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Serializable view of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Player to move next.
    pub current_player: Player,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Applied moves, oldest first.
    pub history: Vec<Move>,
    /// Undone moves, most recently undone last.
    pub redo_stack: Vec<Move>,
}
