//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if the cell is not empty
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// Outcome classification of a position, computed fresh from the board
/// each time rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Won(Player),
    Draw,
    InProgress,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state: the 9 cells plus whose turn it is.
///
/// The cells are laid out row-major:
///
/// ```text
/// 0 | 1 | 2
/// - + - + -
/// 3 | 4 | 5
/// - + - + -
/// 6 | 7 | 8
/// ```
///
/// Mutation happens only through [`make_move`](Self::make_move), which keeps
/// the mark counts consistent (X and O alternate, X first). A state whose
/// [`status`](Self::status) is terminal still accepts moves into remaining
/// empty cells; stopping play at that point is the caller's job (see
/// [`Game`](crate::game::Game)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    cells: [Cell; 9],
    to_move: Player,
}

impl GameState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        GameState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Snapshot of the 9 cells
    pub fn board(&self) -> [Cell; 9] {
        self.cells
    }

    /// Whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Every empty position in ascending order.
    ///
    /// Returns an empty vector only when the board is full; the result is
    /// not filtered by terminal status.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place the current player's mark at `pos` and flip the turn.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for positions past the board and `Occupied`
    /// for cells already holding a mark. The state is untouched on error.
    pub fn make_move(&mut self, pos: usize) -> crate::Result<()> {
        // Positions are unsigned, so only the upper bound needs checking.
        if pos >= 9 {
            return Err(crate::Error::OutOfBounds { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::Occupied { position: pos });
        }

        self.cells[pos] = self.to_move.mark();
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Classify the position as won, drawn, or still in progress.
    ///
    /// Wins are detected before the draw test, so a full board containing a
    /// complete line reports the win. With more than one complete line the
    /// first in [`lines::WIN_LINES`] order decides; under alternating play
    /// they always belong to the same player.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = lines::winner(&self.cells) {
            return GameStatus::Won(player);
        }

        if self.cells.contains(&Cell::Empty) {
            GameStatus::InProgress
        } else {
            GameStatus::Draw
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GameState {
    type Err = crate::Error;

    /// Parse a board from 9 cell characters (`X`, `O`, `.`), ignoring
    /// whitespace. The player to move is inferred from the piece counts:
    /// equal counts mean X moves, X ahead by one means O moves, anything
    /// else is rejected.
    fn from_str(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let to_move = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        Ok(GameState { cells, to_move })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let state = GameState::new();
        assert_eq!(state.to_move(), Player::X);
        for i in 0..9 {
            assert_eq!(state.get(i), Cell::Empty);
        }
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_make_move() {
        let mut state = GameState::new();

        state.make_move(4).unwrap();
        assert_eq!(state.get(4), Cell::X);
        assert_eq!(state.to_move(), Player::O);

        // Move on occupied cell leaves the state untouched
        let before = state;
        let result = state.make_move(4);
        assert!(matches!(result, Err(crate::Error::Occupied { position: 4 })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_make_move_out_of_bounds() {
        let mut state = GameState::new();
        let before = state;

        for pos in [9, 10, usize::MAX] {
            let result = state.make_move(pos);
            assert!(matches!(result, Err(crate::Error::OutOfBounds { .. })));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_turn_alternation() {
        let mut state = GameState::new();
        for pos in 0..9 {
            let mover = state.to_move();
            state.make_move(pos).unwrap();
            assert_eq!(state.to_move(), mover.opponent());
        }
    }

    #[test]
    fn test_legal_moves_ascending() {
        let mut state = GameState::new();
        assert_eq!(state.legal_moves(), (0..9).collect::<Vec<_>>());

        state.make_move(4).unwrap();
        state.make_move(0).unwrap();
        assert_eq!(state.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_legal_moves_empty_only_when_full() {
        // X wins on the top row but the remaining cells stay listed
        let state: GameState = "XXXOO....".parse().unwrap();
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.legal_moves(), vec![5, 6, 7, 8]);

        let full: GameState = "XOXXOOOXX".parse().unwrap();
        assert!(full.legal_moves().is_empty());
    }

    #[test]
    fn test_win_detection_rows_columns_diagonals() {
        let top_row: GameState = "XXXOO....".parse().unwrap();
        assert_eq!(top_row.status(), GameStatus::Won(Player::X));

        let middle_row: GameState = "OO.XXX.O.".parse().unwrap();
        assert_eq!(middle_row.status(), GameStatus::Won(Player::X));

        let column: GameState = "XO.XO.X..".parse().unwrap();
        assert_eq!(column.status(), GameStatus::Won(Player::X));

        let diagonal: GameState = "XO.OX...X".parse().unwrap();
        assert_eq!(diagonal.status(), GameStatus::Won(Player::X));

        let anti_diagonal: GameState = "XXO.O.OX.".parse().unwrap();
        assert_eq!(anti_diagonal.status(), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_status_idempotent() {
        let mut state = GameState::new();
        state.make_move(0).unwrap();
        state.make_move(4).unwrap();

        assert_eq!(state.status(), state.status());
    }

    #[test]
    fn test_draw_detection() {
        let mut state = GameState::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.make_move(pos).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_takes_priority_over_draw() {
        // Full board where X holds the top row: never a draw
        let state: GameState = "XXXOOXOXO".parse().unwrap();
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_from_str_turn_inference() {
        let state: GameState = "XOX......".parse().unwrap();
        assert_eq!(state.get(0), Cell::X);
        assert_eq!(state.get(1), Cell::O);
        assert_eq!(state.to_move(), Player::O);

        let even: GameState = "XO.......".parse().unwrap();
        assert_eq!(even.to_move(), Player::X);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert!(matches!(
            "XO".parse::<GameState>(),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            "XOZ......".parse::<GameState>(),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', position: 2 })
        ));
        assert!(matches!(
            "XX.......".parse::<GameState>(),
            Err(crate::Error::InvalidPieceCounts { x_count: 2, o_count: 0 })
        ));
        assert!(matches!(
            "OO.......".parse::<GameState>(),
            Err(crate::Error::InvalidPieceCounts { x_count: 0, o_count: 2 })
        ));
    }

    #[test]
    fn test_display() {
        let state: GameState = "XOX.O.X..".parse().unwrap();
        assert_eq!(format!("{state}"), "XOX\n.O.\nX..");
    }
}
