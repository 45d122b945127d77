//! Tests for loading configuration from disk.

use std::io::Write;
use tictactoe_engine::{Game, GameConfig, Player};

#[test]
fn test_from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"computer\"").unwrap();
    writeln!(file, "computer_symbol = \"@\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.first_player(), &Player::Mine);
    assert_eq!(config.symbol(Player::Mine), '@');
    assert_eq!(config.symbol(Player::Opponent), 'O');

    let game = Game::from_config(&config);
    assert_eq!(game.to_move(), Player::Mine);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_symbols_rejected_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_symbol = \"O\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("share the symbol"));
}
