//! Terminal UI for two players sharing one keyboard.

mod app;
mod input;
mod ui;

pub use app::{Action, App, Screen};
pub use input::{CursorMove, action_for_key, action_for_mouse, move_cursor};
pub use ui::position_at;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// Logs go to `log_path` so they don't interfere with the terminal.
pub fn run_tui(settings: Settings, log_path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?settings, "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(&settings);
    let res = run_app(&mut terminal, &mut app, settings.ui().tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Poll-draw loop.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut frame_area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            frame_area = f.area();
            ui::draw(f, app);
        })?;

        if event::poll(tick_rate)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    action_for_key(app.screen(), key.code)
                }
                Event::Mouse(mouse) => action_for_mouse(app.screen(), mouse, frame_area),
                _ => None,
            };
            if let Some(action) = action {
                app.handle(action, Instant::now());
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}
