//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};

/// Returns true once no empty square is left.
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}
