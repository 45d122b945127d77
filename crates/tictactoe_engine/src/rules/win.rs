//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;

/// The eight winning lines as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if `player` occupies every square of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let squares = board.squares();
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| squares[index] == mark))
}

/// Returns the first player, in [`Player`] declaration order, holding a line.
pub fn winning_player(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_line(board, player))
}
