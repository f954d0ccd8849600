//! Move-selection strategies
//!
//! Three interchangeable selectors: uniform random, a win/block heuristic,
//! and the historically named "perfect" strategy, which is the same
//! win/block scan and is documented as not actually perfect.

use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{board::GameState, lines};

/// A strategy that picks one of the legal moves for the side to move.
///
/// Selectors only read the state; placing the chosen mark is the caller's
/// job. `&mut self` because selectors own a seedable random generator.
pub trait MoveSelector: Send {
    /// Pick a legal move for the player to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns `NoMovesAvailable` when the board is full.
    fn select_move(&mut self, state: &GameState) -> crate::Result<usize>;

    /// Strategy name for prompts and reports
    fn name(&self) -> &str;
}

/// Uniform random choice over the legal moves
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a selector seeded from entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Create a selector with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, moves: &[usize]) -> crate::Result<usize> {
        if moves.is_empty() {
            return Err(crate::Error::NoMovesAvailable);
        }
        Ok(moves[self.rng.random_range(0..moves.len())])
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, state: &GameState) -> crate::Result<usize> {
        self.pick(&state.legal_moves())
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// The win/block move for the side to move, if one exists.
///
/// The whole line table is scanned for completable own lines before any
/// opponent line is considered, so a win is taken even when a blocking
/// line comes earlier in table order.
fn win_or_block(state: &GameState) -> Option<usize> {
    let cells = state.board();
    let us = state.to_move();

    lines::completing_move(&cells, us).or_else(|| lines::completing_move(&cells, us.opponent()))
}

/// Win/block heuristic.
///
/// Takes a line-completing move when one exists, otherwise blocks the
/// opponent's, otherwise plays randomly.
pub struct SimpleSelector {
    fallback: RandomSelector,
}

impl SimpleSelector {
    pub fn new() -> Self {
        Self {
            fallback: RandomSelector::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: RandomSelector::with_seed(seed),
        }
    }
}

impl Default for SimpleSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for SimpleSelector {
    fn select_move(&mut self, state: &GameState) -> crate::Result<usize> {
        if let Some(position) = win_or_block(state) {
            return Ok(position);
        }
        self.fallback.pick(&state.legal_moves())
    }

    fn name(&self) -> &str {
        "simple"
    }
}

/// The "perfect" strategy, which is deliberately not perfect.
///
/// Plays the same win/block scan as [`SimpleSelector`] and then falls back
/// to a random move. The classical third step of optimal play (creating
/// and blocking forks) is not implemented, so this strategy does **not**
/// guarantee a draw against perfect defense. That limitation is part of
/// its contract; a full solver would be a separate strategy, not a change
/// to this one.
pub struct PerfectSelector {
    fallback: RandomSelector,
}

impl PerfectSelector {
    pub fn new() -> Self {
        Self {
            fallback: RandomSelector::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: RandomSelector::with_seed(seed),
        }
    }
}

impl Default for PerfectSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for PerfectSelector {
    fn select_move(&mut self, state: &GameState) -> crate::Result<usize> {
        if let Some(position) = win_or_block(state) {
            return Ok(position);
        }
        self.fallback.pick(&state.legal_moves())
    }

    fn name(&self) -> &str {
        "perfect"
    }
}

/// Available strategies, as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    Random,
    Simple,
    Perfect,
}

impl SelectorKind {
    /// Create a boxed selector of this kind, deterministic when a seed is
    /// given
    pub fn into_selector(self, seed: Option<u64>) -> Box<dyn MoveSelector> {
        match self {
            SelectorKind::Random => match seed {
                Some(seed) => Box::new(RandomSelector::with_seed(seed)),
                None => Box::new(RandomSelector::new()),
            },
            SelectorKind::Simple => match seed {
                Some(seed) => Box::new(SimpleSelector::with_seed(seed)),
                None => Box::new(SimpleSelector::new()),
            },
            SelectorKind::Perfect => match seed {
                Some(seed) => Box::new(PerfectSelector::with_seed(seed)),
                None => Box::new(PerfectSelector::new()),
            },
        }
    }
}
