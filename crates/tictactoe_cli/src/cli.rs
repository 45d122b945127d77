//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to game configuration file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Let the computer make the first move
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the engine's best move for a board
    Best {
        /// Board as nine cells of X (engine), O (opponent) or . (empty), e.g. "OO.|...|..."
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
