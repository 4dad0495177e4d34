//! Application state and logic.

use super::input::{CursorMove, move_cursor};
use crate::config::Settings;
use crate::games::tictactoe::{EngineError, GameEngine, Phase, Position};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen shown before the first game.
    Start,
    /// The board.
    Board,
}

/// A user intent, decoupled from the key or click that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the start screen and begin playing.
    Start,
    /// Move the cursor one cell.
    MoveCursor(CursorMove),
    /// Place a mark at the given cell.
    Place(Position),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Take back the last move.
    Undo,
    /// Re-apply the last undone move.
    Redo,
    /// Start a new game.
    Restart,
    /// Exit the application.
    Quit,
}

/// A message that disappears on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    message: String,
    expires_at: Instant,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    screen: Screen,
    cursor: Position,
    notice: Option<Notice>,
    notice_duration: Duration,
    should_quit: bool,
}

impl App {
    /// Creates an application on the start screen with an idle engine.
    #[instrument]
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: GameEngine::new(*settings.engine()),
            screen: Screen::Start,
            cursor: Position::Center,
            notice: None,
            notice_duration: settings.ui().notice_duration(),
            should_quit: false,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the active notice, if one is showing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }

    /// Status text derived from the engine.
    pub fn status_line(&self) -> String {
        let hint = if *self.engine.config().undo_when_finished() {
            "Press 'u' to undo, 'r' to restart or 'q' to quit."
        } else {
            "Press 'r' to restart or 'q' to quit."
        };
        match self.engine.phase() {
            Phase::Idle => "Press Enter to start".to_string(),
            Phase::InProgress => format!("Player {} to move", self.engine.current_player()),
            Phase::Won(player) => format!("Player {} wins! {}", player, hint),
            Phase::Draw => format!("Draw! {}", hint),
        }
    }

    /// Applies an action. `now` timestamps any notice it raises.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, action: Action, now: Instant) {
        debug!(?action, "Handling action");
        let result = match action {
            Action::Start => {
                self.engine.start();
                self.screen = Screen::Board;
                Ok(())
            }
            Action::MoveCursor(dir) => {
                self.cursor = move_cursor(self.cursor, dir);
                Ok(())
            }
            Action::Place(pos) => {
                self.cursor = pos;
                self.engine.place(pos).map(|_| ())
            }
            Action::PlaceAtCursor => self.engine.place(self.cursor).map(|_| ()),
            Action::Undo => self.engine.undo().map(|mv| self.cursor = mv.position()),
            Action::Redo => self.engine.redo().map(|mv| self.cursor = mv.position()),
            Action::Restart => {
                self.restart();
                Ok(())
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                Ok(())
            }
        };

        match result {
            // Cursor movement leaves a pending notice on screen.
            Ok(()) if matches!(action, Action::MoveCursor(_)) => {}
            Ok(()) => self.notice = None,
            Err(err) => self.show_notice(err, now),
        }
    }

    /// Drops the notice once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.screen = Screen::Board;
        self.cursor = Position::Center;
        self.notice = None;
    }

    fn show_notice(&mut self, err: EngineError, now: Instant) {
        debug!(%err, "Showing notice");
        self.notice = Some(Notice {
            message: err.to_string(),
            expires_at: now + self.notice_duration,
        });
    }
}
