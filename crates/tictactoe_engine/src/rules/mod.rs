//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is stored on the board:
//! outcomes are recomputed from the squares every time they are asked for.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line, winning_player};

use crate::types::{Board, GameOutcome};

/// Derives the outcome of a board.
///
/// A completed line for [`crate::Player::Mine`] is reported before one for
/// the opponent, so a malformed board holding both lines reads as a win
/// for the engine. A full board without a line is a draw.
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winning_player(board) {
        GameOutcome::Win(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
