//! Invariants of a game session.
//!
//! Every accepted move is checked against [`SessionInvariants`] before it
//! is committed; a failing move is turned away as
//! [`crate::MoveError::InvariantViolation`].

use crate::game::Game;
use crate::types::{Board, Player, Square};

/// A property every state of type `S` must satisfy.
pub trait Invariant<S> {
    /// Returns true if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property says, used when reporting a violation.
    fn description() -> &'static str;
}

/// An invariant that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the failed invariant.
    pub description: &'static str,
}

/// Invariants checked together, reporting every one that fails.
pub trait InvariantSet<S> {
    /// Checks each invariant in turn.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|&(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// Marks alternate starting with the game's first player, and no replayed
/// move lands on an occupied square.
pub struct HistoryConsistent;

impl Invariant<Game> for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();
        let mut player = game.first_player();

        for &mv in game.history() {
            if !replayed.is_legal(mv) {
                return false;
            }
            replayed.place(mv, player);
            player = player.opponent();
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}

/// Invariant: mark counts never differ by more than one, and the side that
/// moved first never trails.
pub struct BalancedMarks;

impl Invariant<Game> for BalancedMarks {
    fn holds(game: &Game) -> bool {
        let count = |player: Player| {
            game.board()
                .squares()
                .iter()
                .filter(|&&square| square == Square::Occupied(player))
                .count()
        };
        let first = count(game.first_player());
        let second = count(game.first_player().opponent());

        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First player leads by at most one mark"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (HistoryConsistent, BalancedMarks);
