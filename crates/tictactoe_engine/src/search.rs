//! Exhaustive minimax search for the computer player.
//!
//! The engine always plays [`Player::Mine`] and assumes the opponent
//! answers every move with the reply that is worst for it. Every line of
//! play is explored to the end; there is no depth limit and no pruning, so
//! a search from the empty board visits every reachable position once per
//! path.
//!
//! Searches run on a private copy of the caller's board. Each tentative
//! mark is held by a [`Trial`] guard that takes it back when the guard is
//! dropped, so the working copy is restored on every path out of a
//! recursive call.

use crate::types::{Board, Move, Player};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Value of a position from the engine's point of view.
///
/// Terminal positions score [`Score::Won`], [`Score::Lost`] or
/// [`Score::Draw`]. The two finite bounds are the starting points of the
/// running best at inner nodes: a maximizing node whose every move loses
/// on the spot reports [`Score::Losing`] rather than [`Score::Lost`], and a
/// minimizing node whose every reply loses reports [`Score::Winning`]. The
/// sign of a score always matches the result under perfect play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    /// The opponent holds a line.
    #[display("-inf")]
    Lost,
    /// Every move available to the engine loses.
    #[display("-1000")]
    Losing,
    /// Neither side can force a win.
    #[display("0")]
    Draw,
    /// Every reply available to the opponent loses.
    #[display("1000")]
    Winning,
    /// The engine holds a line.
    #[display("+inf")]
    Won,
}

impl Score {
    /// Starting point of a maximizing node.
    pub const FLOOR: Score = Score::Losing;

    /// Starting point of a minimizing node.
    pub const CEILING: Score = Score::Winning;

    /// Numeric value of the score.
    pub fn value(self) -> f64 {
        match self {
            Score::Lost => f64::NEG_INFINITY,
            Score::Losing => -1000.0,
            Score::Draw => 0.0,
            Score::Winning => 1000.0,
            Score::Won => f64::INFINITY,
        }
    }
}

/// Result of scoring every engine move on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Chosen move, `None` when the board has no empty square.
    best_move: Option<Move>,
    /// Score of the chosen move.
    score: Option<Score>,
    /// Positions visited, including the root candidates.
    nodes: u64,
}

/// Scores `board` with `maximizing` telling whose turn it is.
///
/// `maximizing == true` means the engine moves next. The board is not
/// modified.
pub fn evaluate(board: &Board, maximizing: bool) -> Score {
    let mut scratch = *board;
    Search::default().minimax(&mut scratch, maximizing)
}

/// Scores every engine move on `board` and picks the best one.
///
/// Candidates are tried in row-major order and a later candidate replaces
/// the current pick only with a strictly higher score, so ties go to the
/// smallest `(row, col)`. The first candidate always becomes the initial
/// pick: a board with an empty square yields a move even when every move
/// loses.
#[instrument(skip(board), fields(empty = board.empty_cells().count()))]
pub fn analyze(board: &Board) -> Analysis {
    let mut scratch = *board;
    let mut search = Search::default();
    let mut best: Option<(Move, Score)> = None;

    for mv in Move::all() {
        if !scratch.is_legal(mv) {
            continue;
        }

        let score = {
            let mut trial = Trial::new(&mut scratch, mv, Player::Mine);
            search.minimax(trial.board(), false)
        };
        trace!(%mv, %score, "Scored candidate");

        if best.is_none_or(|(_, current)| score > current) {
            best = Some((mv, score));
        }
    }

    let analysis = Analysis {
        best_move: best.map(|(mv, _)| mv),
        score: best.map(|(_, score)| score),
        nodes: search.nodes,
    };
    debug!(
        best_move = ?analysis.best_move,
        score = ?analysis.score,
        nodes = analysis.nodes,
        "Search complete"
    );
    analysis
}

/// Returns the engine's best move without touching `board`.
pub fn find_best_move(board: &Board) -> Option<Move> {
    analyze(board).best_move
}

/// Finds the engine's best move and places its mark on `board`.
///
/// Returns `None`, leaving the board untouched, when no empty square is
/// left.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board) -> Option<Move> {
    let mv = find_best_move(board)?;
    board.place(mv, Player::Mine);
    Some(mv)
}

/// Recursive minimax state.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if board.winner(Player::Mine) {
            return Score::Won;
        }
        if board.winner(Player::Opponent) {
            return Score::Lost;
        }
        if board.is_full() {
            return Score::Draw;
        }

        let (player, mut best) = if maximizing {
            (Player::Mine, Score::FLOOR)
        } else {
            (Player::Opponent, Score::CEILING)
        };

        for mv in Move::all() {
            if !board.is_legal(mv) {
                continue;
            }

            let score = {
                let mut trial = Trial::new(board, mv, player);
                self.minimax(trial.board(), !maximizing)
            };

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// A tentative mark, taken back on drop.
struct Trial<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Trial<'a> {
    fn new(board: &'a mut Board, mv: Move, player: Player) -> Self {
        board.place(mv, player);
        Self { board, mv }
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}
