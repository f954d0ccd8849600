//! t4 (tiny tic-tac-toe) - game-state engine and move-selection strategies
//!
//! This crate provides:
//! - A tic-tac-toe game-state engine: move legality, win/draw detection,
//!   and a turn-taking wrapper with history
//! - Pluggable move selectors: uniform random, a win/block heuristic, and
//!   a deliberately incomplete "perfect" strategy
//! - A console front end for interactive play and AI-vs-AI simulation

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod selectors;

pub use board::{Cell, GameState, GameStatus, Player};
pub use error::{Error, Result};
pub use game::{Game, GameRecord, Move};
pub use selectors::{
    MoveSelector, PerfectSelector, RandomSelector, SelectorKind, SimpleSelector,
};
