//! One-shot analysis of a board given on the command line.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_engine::{Board, analyze};
use tracing::instrument;

/// Prints the engine's best move for `board`, as text or JSON.
///
/// `X` marks belong to the engine and `O` marks to its opponent.
#[instrument(skip(output))]
pub fn report_best_move<W: Write>(board: &str, json: bool, output: &mut W) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let analysis = analyze(&board);

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&analysis)?)?;
        return Ok(());
    }

    writeln!(output, "{board}\n")?;
    match (analysis.best_move(), analysis.score()) {
        (Some(mv), Some(score)) => {
            writeln!(output, "Best move: {mv}")?;
            writeln!(output, "Score: {score}")?;
        }
        _ => writeln!(output, "No legal moves")?,
    }
    writeln!(output, "Nodes: {}", analysis.nodes())?;
    Ok(())
}
