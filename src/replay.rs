//! Headless replay of a move list.

use crate::config::Settings;
use crate::games::tictactoe::{GameEngine, Phase, Position};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use tracing::{info, instrument};

/// Parses `row,col` tokens, replays them and renders the outcome.
///
/// The text report is the board followed by a blank line and the outcome.
/// With `json` set, the report is a pretty-printed [`Snapshot`](crate::Snapshot).
///
/// # Errors
///
/// Fails on a malformed token or the first move the engine rejects.
#[instrument(skip(moves, settings), fields(count = moves.len()))]
pub fn replay_report(moves: &[String], settings: &Settings, json: bool) -> Result<String> {
    let coords = moves
        .iter()
        .map(|m| {
            Position::parse_row_col(m)
                .map(|pos| (pos.row(), pos.col()))
                .with_context(|| {
                    format!("Invalid move '{}': expected row,col with both in 0..3", m)
                })
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Replaying moves");
    let engine = GameEngine::replay(&coords, *settings.engine())?;

    if json {
        return Ok(serde_json::to_string_pretty(&engine.snapshot())?);
    }

    let mut report = format!("{}\n\n", engine.board());
    match engine.phase() {
        Phase::Won(player) => write!(report, "Player {} wins", player)?,
        Phase::Draw => write!(report, "Draw")?,
        Phase::InProgress | Phase::Idle => {
            write!(report, "Player {} to move", engine.current_player())?
        }
    }
    Ok(report)
}
