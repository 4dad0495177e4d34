//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one keyboard, unlimited undo
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with undo and redo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Where to write logs while the UI owns the terminal
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Moves as `row,col` pairs, e.g. `0,0 1,1 0,1`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
