//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    /// The computer, driven by the minimax engine.
    #[serde(alias = "computer")]
    Mine,
    /// The human on the other side of the board.
    #[serde(alias = "human")]
    Opponent,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Mine => Player::Opponent,
            Player::Opponent => Player::Mine,
        }
    }

    /// Default board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Mine => 'X',
            Player::Opponent => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A cell coordinate, row then column, both 0-indexed.
///
/// Coordinates are not range checked on construction; use
/// [`Board::is_legal`] before placing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self::new(index / SIZE, index % SIZE))
    }

    /// Row-major board index, if the coordinate is on the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * SIZE + self.col)
    }

    /// Returns true if both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELLS).map(|index| Self::new(index / SIZE, index % SIZE))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let mut next = || -> Result<usize, MoveParseError> {
            let part = parts.next().ok_or_else(|| MoveParseError::new(s))?;
            part.parse().map_err(|_| MoveParseError::new(s))
        };

        let row = next()?;
        let col = next()?;
        if parts.next().is_some() {
            return Err(MoveParseError::new(s));
        }
        Ok(Self::new(row, col))
    }
}

/// Input that could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Expected \"row col\", got {input:?}")]
pub struct MoveParseError {
    /// The rejected input.
    pub input: String,
}

impl MoveParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.trim().to_string(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board does no bookkeeping beyond cell contents: whose turn it is
/// and whether the game is over belong to the caller (see [`crate::Game`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|index| self.squares[index])
    }

    /// Returns true if the coordinate is on the board and the square is empty.
    pub fn is_legal(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Writes `player`'s mark into the square.
    ///
    /// Occupancy is not checked: callers confirm [`Board::is_legal`] first,
    /// and an occupied square is overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    pub fn place(&mut self, mv: Move, player: Player) {
        self.squares[Self::checked_index(mv)] = Square::Occupied(player);
    }

    /// Empties a single square.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    pub(crate) fn clear(&mut self, mv: Move) {
        self.squares[Self::checked_index(mv)] = Square::Empty;
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Returns true if no empty square remains.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Returns true if `player` holds a complete row, column or diagonal.
    pub fn winner(&self, player: Player) -> bool {
        crate::rules::has_line(self, player)
    }

    /// Derives the outcome from the current contents.
    pub fn outcome(&self) -> GameOutcome {
        crate::rules::outcome(self)
    }

    /// Empty squares in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|&mv| self.is_legal(mv))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Formats the board with the given player symbols, `.` for empty squares.
    pub fn render(&self, mine: char, opponent: char) -> String {
        let mut result = String::new();
        for (index, square) in self.squares.iter().enumerate() {
            result.push(match square {
                Square::Empty => EMPTY_SYMBOL,
                Square::Occupied(Player::Mine) => mine,
                Square::Occupied(Player::Opponent) => opponent,
            });
            if index % SIZE < SIZE - 1 {
                result.push(' ');
            } else if index < CELLS - 1 {
                result.push('\n');
            }
        }
        result
    }

    fn checked_index(mv: Move) -> usize {
        match mv.index() {
            Some(index) => index,
            None => panic!("move {mv} is off the board"),
        }
    }
}

/// Symbol used for an empty square in text boards.
pub const EMPTY_SYMBOL: char = '.';

/// Outcome derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameOutcome {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Win(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameOutcome {
    /// Returns true for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Player::Mine.symbol(), Player::Opponent.symbol()))
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`/`-`/`_` cells; whitespace, `|` and `/` separate rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELLS];
        let mut count = 0;

        for c in s.chars() {
            let square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::Mine),
                'O' => Square::Occupied(Player::Opponent),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(BoardParseError::UnknownSymbol(c)),
            };
            if count == CELLS {
                return Err(BoardParseError::WrongCellCount(count + 1));
            }
            squares[count] = square;
            count += 1;
        }

        if count != CELLS {
            return Err(BoardParseError::WrongCellCount(count));
        }
        Ok(Self { squares })
    }
}

/// Error returned when a text board cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character other than a mark, an empty marker or a separator.
    #[display("Unknown board symbol {:?}", _0)]
    UnknownSymbol(#[error(not(source))] char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_index_round_trip() {
        assert_eq!(Move::new(0, 0).index(), Some(0));
        assert_eq!(Move::new(1, 2).index(), Some(5));
        assert_eq!(Move::from_index(7), Some(Move::new(2, 1)));
        assert_eq!(Move::from_index(9), None);
        assert_eq!(Move::new(3, 0).index(), None);
    }

    #[test]
    fn test_move_all_is_row_major() {
        let all: Vec<Move> = Move::all().collect();
        assert_eq!(all.len(), CELLS);
        assert_eq!(all[0], Move::new(0, 0));
        assert_eq!(all[3], Move::new(1, 0));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!("1 2".parse::<Move>(), Ok(Move::new(1, 2)));
        assert_eq!(" 0,2 ".parse::<Move>(), Ok(Move::new(0, 2)));
        assert!("1".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
        assert!("a b".parse::<Move>().is_err());
    }

    #[test]
    fn test_place_overwrites_without_checking() {
        let mut board = Board::new();
        board.place(Move::new(1, 1), Player::Opponent);
        board.place(Move::new(1, 1), Player::Mine);
        assert_eq!(
            board.get(Move::new(1, 1)),
            Some(Square::Occupied(Player::Mine))
        );
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_place_off_board_panics() {
        let mut board = Board::new();
        board.place(Move::new(0, 3), Player::Mine);
    }

    #[test]
    fn test_display_matches_parse() {
        let board: Board = "XO.|.X.|..O".parse().unwrap();
        assert_eq!(board.to_string(), "X O .\n. X .\n. . O");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_render_uses_custom_symbols() {
        let board: Board = "X........".parse().unwrap();
        assert!(board.render('#', '@').starts_with("# . ."));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('?'))
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(2))
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(10))
        );
    }
}
