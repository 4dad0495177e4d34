//! Tic Tac Toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Settings, replay_report, tui};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => run_play(config, &log_file),
        Command::Replay {
            moves,
            config,
            json,
        } => {
            initialize_stderr_tracing();
            run_replay(&moves, config.as_deref(), json)
        }
    }
}

/// Run the terminal game.
fn run_play(config: Option<PathBuf>, log_file: &Path) -> Result<()> {
    let settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    tui::run_tui(settings, log_file)
}

/// Apply moves headlessly and print the outcome.
fn run_replay(moves: &[String], config: Option<&Path>, json: bool) -> Result<()> {
    let settings = Settings::load(config).context("Failed to load settings")?;
    println!("{}", replay_report(moves, &settings, json)?);
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
