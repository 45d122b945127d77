//! A single game between a human and the engine.
//!
//! The board itself validates nothing; this is the layer that does. It
//! tracks whose turn it is, refuses moves once the game is decided and
//! only goes back to an empty board on an explicit [`Game::reset`].

use crate::config::GameConfig;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::search;
use crate::types::{Board, GameOutcome, Move, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Error returned when a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The coordinate is off the board.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(Move),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),

    /// The session state no longer holds together, e.g. a restored game
    /// whose history doesn't match its board.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Game session: one board, the turn order and the move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameOutcome,
    to_move: Player,
    first_player: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty board with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            status: GameOutcome::InProgress,
            to_move: first_player,
            first_player,
            history: Vec::new(),
        }
    }

    /// Creates a game using the configured turn order.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.first_player())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> GameOutcome {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays the human's move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, it is the engine's turn,
    /// the square is off the board or taken, or the session state is
    /// inconsistent.
    #[instrument(skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<GameOutcome, MoveError> {
        self.apply(Player::Opponent, mv)
    }

    /// Lets the engine choose and play its move.
    ///
    /// Returns `Ok(None)` when no empty square is left.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over or it is the human's turn.
    #[instrument(skip(self))]
    pub fn respond(&mut self) -> Result<Option<Move>, MoveError> {
        self.check_turn(Player::Mine)?;

        let Some(mv) = search::find_best_move(&self.board) else {
            debug!("No empty square left for the engine");
            return Ok(None);
        };

        self.apply(Player::Mine, mv)?;
        Ok(Some(mv))
    }

    /// Clears the board and history and hands the move back to the first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.status = GameOutcome::InProgress;
        self.to_move = self.first_player;
        info!(first_player = %self.first_player, "Game reset");
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move attempted on a finished game");
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            warn!(%player, to_move = %self.to_move, "Move attempted out of turn");
            return Err(MoveError::WrongPlayer(player));
        }
        Ok(())
    }

    fn apply(&mut self, player: Player, mv: Move) -> Result<GameOutcome, MoveError> {
        self.check_turn(player)?;

        if !mv.in_bounds() {
            warn!(%mv, "Move off the board");
            return Err(MoveError::OutOfBounds(mv));
        }
        if !self.board.is_legal(mv) {
            warn!(%mv, "Square already occupied");
            return Err(MoveError::SquareOccupied(mv));
        }

        let mut next = self.clone();
        next.board.place(mv, player);
        next.history.push(mv);
        next.status = next.board.outcome();
        if !next.status.is_terminal() {
            next.to_move = player.opponent();
        }

        SessionInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%mv, %descriptions, "Move rejected by session invariants");
            MoveError::InvariantViolation(descriptions)
        })?;

        *self = next;
        info!(%player, %mv, status = %self.status, "Move played");
        Ok(self.status)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_waits_for_first_player() {
        let game = Game::new(Player::Opponent);
        assert_eq!(game.to_move(), Player::Opponent);
        assert_eq!(game.status(), GameOutcome::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_play_then_respond_alternates() {
        let mut game = Game::new(Player::Opponent);
        game.play(Move::new(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::Mine);

        let reply = game.respond().unwrap().expect("engine has a move");
        assert_ne!(reply, Move::new(0, 0));
        assert_eq!(game.to_move(), Player::Opponent);
        assert_eq!(game.history(), &[Move::new(0, 0), reply]);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = Game::new(Player::Mine);
        assert_eq!(
            game.play(Move::new(1, 1)),
            Err(MoveError::WrongPlayer(Player::Opponent))
        );

        let mut game = Game::new(Player::Opponent);
        assert_eq!(game.respond(), Err(MoveError::WrongPlayer(Player::Mine)));
    }

    #[test]
    fn test_occupied_and_off_board_rejected() {
        let mut game = Game::new(Player::Opponent);
        assert_eq!(
            game.play(Move::new(3, 0)),
            Err(MoveError::OutOfBounds(Move::new(3, 0)))
        );

        game.play(Move::new(1, 1)).unwrap();
        let reply = game.respond().unwrap().unwrap();
        assert_eq!(game.play(reply), Err(MoveError::SquareOccupied(reply)));
        // A rejected move leaves the turn where it was
        assert_eq!(game.to_move(), Player::Opponent);
    }

    #[test]
    fn test_corrupted_board_rejects_move_unchanged() {
        let mut game = Game::new(Player::Opponent);
        game.play(Move::new(1, 1)).unwrap();
        game.board_mut().place(Move::new(2, 2), Player::Opponent);

        let before = game.clone();
        match game.respond() {
            Err(MoveError::InvariantViolation(description)) => {
                assert!(description.contains("replayed move history"));
            }
            other => panic!("Expected invariant violation, got {other:?}"),
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            MoveError::SquareOccupied(Move::new(0, 2)).to_string(),
            "Square (0, 2) is already occupied"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::Mine).to_string(),
            "It's not Mine's turn"
        );
    }
}
