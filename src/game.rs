//! Turn-taking wrapper: move history, terminal enforcement, and the
//! serializable game record

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::board::{GameState, GameStatus, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game in progress: the evolving state plus the moves that produced it.
///
/// [`GameState`] itself accepts moves into empty cells even after a win;
/// this wrapper is the caller that stops play once the status turns
/// terminal.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    moves: Vec<Move>,
}

impl Game {
    /// Start a fresh game: empty board, X to move
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
            moves: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Play a move for the side to move and return the resulting status.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once the game has a terminal status; otherwise
    /// whatever [`GameState::make_move`] rejects.
    pub fn play(&mut self, position: usize) -> crate::Result<GameStatus> {
        if self.status().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = self.state.to_move();
        self.state.make_move(position)?;
        self.moves.push(Move { position, player });
        Ok(self.status())
    }

    /// Snapshot the game as a serializable record
    pub fn record(&self) -> GameRecord {
        GameRecord {
            moves: self.moves.clone(),
            status: self.status(),
        }
    }
}

/// Serializable transcript of a game: the moves in order plus the status
/// they produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub status: GameStatus,
}

impl GameRecord {
    /// Write the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Read a record back from JSON and validate it by replay.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an impossible game.
    pub fn load(path: &Path) -> crate::Result<GameRecord> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let record: GameRecord = serde_json::from_reader(file)?;
        record.replay()?;
        Ok(record)
    }

    /// Re-apply the recorded moves from an empty board, verifying each is
    /// legal in sequence and that the recorded status matches the outcome.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` naming the first offending move.
    pub fn replay(&self) -> crate::Result<Game> {
        let mut game = Game::new();

        for (index, mv) in self.moves.iter().enumerate() {
            let expected = game.state().to_move();
            if expected != mv.player {
                return Err(crate::Error::InvalidRecord {
                    index,
                    reason: format!("recorded for {} but {} is to move", mv.player, expected),
                });
            }
            game.play(mv.position)
                .map_err(|source| crate::Error::InvalidRecord {
                    index,
                    reason: source.to_string(),
                })?;
        }

        if game.status() != self.status {
            return Err(crate::Error::InvalidRecord {
                index: self.moves.len(),
                reason: "recorded status does not match the replayed moves".to_string(),
            });
        }

        Ok(game)
    }
}
