//! Tests for the interactive session loop, driven from memory.

use std::io::Cursor;
use tictactoe_cli::run_session;
use tictactoe_engine::{Game, GameConfig, GameOutcome, Player};

fn run(first_player: Player, input: &str) -> (Game, String) {
    let config = GameConfig::default().with_first_player(first_player);
    let mut game = Game::from_config(&config);
    let mut output = Vec::new();
    run_session(&mut game, &config, Cursor::new(input), &mut output).expect("session runs");
    (game, String::from_utf8(output).expect("utf-8 output"))
}

/// Every cell in row-major order, so the human keeps playing until the game ends.
fn every_cell() -> String {
    (0..3)
        .flat_map(|row| (0..3).map(move |col| format!("{row} {col}\n")))
        .collect()
}

#[test]
fn test_quit_ends_session() {
    let (game, output) = run(Player::Opponent, "q\nwhatever\n");
    assert!(game.history().is_empty());
    assert!(output.contains(". . .\n. . .\n. . ."));
    assert!(!output.contains("Expected"));
}

#[test]
fn test_move_gets_engine_reply() {
    let (game, output) = run(Player::Opponent, "1 1\nq\n");
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.to_move(), Player::Opponent);
    assert_eq!(output.matches('X').count(), 1);
}

#[test]
fn test_bad_input_is_reported() {
    let (game, output) = run(Player::Opponent, "middle\n5 5\n");
    assert!(output.contains("Expected \"row col\", got \"middle\""));
    assert!(output.contains("Square (5, 5) is off the board"));
    assert!(game.history().is_empty());
}

#[test]
fn test_occupied_square_is_reported() {
    let (_, output) = run(Player::Opponent, "0 0\n0 0\n");
    assert!(output.contains("Square (0, 0) is already occupied"));
}

#[test]
fn test_game_ends_with_single_verdict() {
    let input = every_cell() + &every_cell();
    let (game, output) = run(Player::Opponent, &input);

    assert!(game.is_over());
    assert_ne!(game.status(), GameOutcome::Win(Player::Opponent));
    assert!(!output.contains("You Win!"));
    let verdicts = output.matches("You Lose!").count() + output.matches("It's a Tie!").count();
    assert_eq!(verdicts, 1);
    assert!(output.contains("Press r to restart or q to quit"));
}

#[test]
fn test_restart_after_game_over() {
    let input = every_cell() + "r\n";
    let (game, output) = run(Player::Opponent, &input);

    assert!(output.contains("Press r to restart or q to quit"));
    assert_eq!(game.status(), GameOutcome::InProgress);
    assert!(game.history().is_empty());
}

#[test]
fn test_computer_first_opens_the_game() {
    let (game, output) = run(Player::Mine, "q\n");
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.to_move(), Player::Opponent);
    assert_eq!(output.matches('X').count(), 1);
}

#[test]
fn test_computer_first_reopens_after_restart() {
    let (game, _) = run(Player::Mine, "r\n");
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.to_move(), Player::Opponent);
}

#[test]
fn test_configured_symbols_are_rendered() {
    let config = GameConfig::from_toml_str(
        r#"
        computer_symbol = "@"
        human_symbol = "H"
        "#,
    )
    .unwrap();
    let mut game = Game::from_config(&config);
    let mut output = Vec::new();
    run_session(&mut game, &config, Cursor::new("2 2\n"), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches('@').count(), 1);
    assert!(output.contains('H'));
    assert!(!output.contains('X'));
}
