//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tictactoe_cli::{Cli, Command, report_best_move, run_session};
use tictactoe_engine::{Game, GameConfig, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("warn,tictactoe_engine=info,tictactoe_cli=info")
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer_first,
        } => run_play(&config, computer_first),
        Command::Best { board, json } => report_best_move(&board, json, &mut std::io::stdout()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config_path: &Path, computer_first: bool) -> Result<()> {
    let mut config = if config_path.exists() {
        GameConfig::from_file(config_path)?
    } else {
        info!("No config file found, using defaults");
        GameConfig::default()
    };
    if computer_first {
        config = config.with_first_player(Player::Mine);
    }

    let mut game = Game::from_config(&config);
    let stdin = std::io::stdin();
    run_session(&mut game, &config, stdin.lock(), &mut std::io::stdout())
}
