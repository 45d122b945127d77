//! Interactive game loop over line-oriented input and output.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameConfig, GameOutcome, Move, Player};
use tracing::{debug, info, instrument};

/// What the player asked for on one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Restart,
    Play(Move),
}

impl Input {
    fn parse(line: &str) -> Result<Self, tictactoe_engine::MoveParseError> {
        match line.to_ascii_lowercase().as_str() {
            "q" | "quit" => Ok(Self::Quit),
            "r" | "restart" => Ok(Self::Restart),
            _ => line.parse().map(Self::Play),
        }
    }
}

/// Line shown when a game ends.
fn verdict(outcome: GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::Win(Player::Opponent) => Some("You Win!"),
        GameOutcome::Win(Player::Mine) => Some("You Lose!"),
        GameOutcome::Draw => Some("It's a Tie!"),
        GameOutcome::InProgress => None,
    }
}

/// Runs games until the player quits or input ends.
///
/// Each line is `row col` (0-indexed), `r` to restart or `q` to quit.
/// Rejected moves are reported and the prompt repeats. Once a game is
/// decided only `r` and `q` are accepted.
#[instrument(skip_all, fields(first_player = %game.first_player()))]
pub fn run_session<R, W>(
    game: &mut Game,
    config: &GameConfig,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    engine_opens(game)?;
    show_board(game, config, output)?;
    prompt(game, output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt(game, output)?;
            continue;
        }

        match Input::parse(line) {
            Ok(Input::Quit) => {
                info!("Player quit");
                return Ok(());
            }
            Ok(Input::Restart) => {
                game.reset();
                engine_opens(game)?;
                show_board(game, config, output)?;
            }
            Ok(Input::Play(_)) if game.is_over() => {}
            Ok(Input::Play(mv)) => match game.play(mv) {
                Ok(_) => {
                    if !game.is_over() {
                        game.respond()?;
                    }
                    show_board(game, config, output)?;
                    if let Some(text) = verdict(game.status()) {
                        info!(outcome = %game.status(), "Game finished");
                        writeln!(output, "{text}")?;
                    }
                }
                Err(e) => writeln!(output, "{e}")?,
            },
            Err(e) => writeln!(output, "{e}")?,
        }

        prompt(game, output)?;
    }

    debug!("Input closed");
    Ok(())
}

/// Plays the engine's opening move when it moves first.
fn engine_opens(game: &mut Game) -> Result<()> {
    if game.to_move() == Player::Mine && !game.is_over() {
        game.respond()?;
    }
    Ok(())
}

fn show_board<W: Write>(game: &Game, config: &GameConfig, output: &mut W) -> Result<()> {
    let board = game
        .board()
        .render(config.symbol(Player::Mine), config.symbol(Player::Opponent));
    writeln!(output, "\n{board}\n")?;
    Ok(())
}

fn prompt<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    if game.is_over() {
        write!(output, "Press r to restart or q to quit: ")?;
    } else {
        write!(output, "Your move (row col), r to restart, q to quit: ")?;
    }
    output.flush()?;
    Ok(())
}
