//! Tic-tac-toe with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: a 3x3 grid of squares with placement and terminal checks
//! - **Rules**: pure win and draw detection over a board
//! - **Search**: minimax over every continuation, choosing the engine's move
//! - **Game**: one session's turn order, history and status
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Move, Player, find_best_move};
//!
//! let mut board = Board::new();
//! board.place(Move::new(0, 0), Player::Opponent);
//! board.place(Move::new(0, 1), Player::Opponent);
//!
//! // The search leaves the board alone; the caller commits the move
//! let reply = find_best_move(&board).expect("board has empty squares");
//! assert_eq!(reply, Move::new(0, 2));
//! board.place(reply, Player::Mine);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod invariants;
mod search;
mod types;

pub mod rules;

// Crate-level exports - Board model
pub use types::{
    Board, BoardParseError, CELLS, EMPTY_SYMBOL, GameOutcome, Move, MoveParseError, Player,
    SIZE, Square,
};

// Crate-level exports - Search engine
pub use search::{Analysis, Score, analyze, best_move, evaluate, find_best_move};

// Crate-level exports - Game session
pub use game::{Game, MoveError};
pub use invariants::{
    BalancedMarks, HistoryConsistent, Invariant, InvariantSet, InvariantViolation,
    SessionInvariants,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
