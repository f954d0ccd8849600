//! Game-record export and reload

use t4::{Error, Game, GameRecord, GameStatus, Move, Player};

fn finished_game() -> Game {
    let mut game = Game::new();
    // X wins the left column
    for pos in [0, 1, 3, 2, 6] {
        game.play(pos).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    game
}

#[test]
fn save_and_load_preserves_the_transcript() {
    let game = finished_game();
    let record = game.record();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");

    record.save(&path).unwrap();
    let loaded = GameRecord::load(&path).unwrap();

    assert_eq!(loaded, record);
    assert_eq!(loaded.status, GameStatus::Won(Player::X));
    assert_eq!(loaded.moves.len(), 5);
}

#[test]
fn load_rejects_a_tampered_transcript() {
    let mut record = finished_game().record();
    // Claim the last move was O's
    record.moves.last_mut().unwrap().player = Player::O;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tampered.json");
    record.save(&path).unwrap();

    assert!(matches!(
        GameRecord::load(&path),
        Err(Error::InvalidRecord { index: 4, .. })
    ));
}

#[test]
fn load_rejects_unparseable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(
        GameRecord::load(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn replay_rejects_an_occupied_move() {
    let record = GameRecord {
        moves: vec![
            Move { position: 4, player: Player::X },
            Move { position: 4, player: Player::O },
        ],
        status: GameStatus::InProgress,
    };

    assert!(matches!(
        record.replay(),
        Err(Error::InvalidRecord { index: 1, .. })
    ));
}

#[test]
fn missing_file_reports_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    assert!(matches!(GameRecord::load(&path), Err(Error::Io { .. })));
}
