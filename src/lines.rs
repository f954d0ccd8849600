//! Win-line table and line scanning, shared by status detection and the
//! heuristic selectors

use crate::board::{Cell, Player};

/// The eight winning index triples on the 3x3 board.
///
/// Scan order is part of the contract: [`winner`] and [`completing_move`]
/// report the first qualifying line in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The player holding the first complete line in table order, if any
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WIN_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && cells[line[1]] == first && cells[line[2]] == first {
            return first.player();
        }
    }
    None
}

/// First empty cell that would complete a line for `player`, in table order.
///
/// A line qualifies when it holds two of the player's marks and exactly one
/// empty cell.
pub fn completing_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
    WIN_LINES
        .iter()
        .find_map(|line| completing_move_in_line(cells, player, line))
}

fn completing_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
    let mark = player.mark();
    let mut ours = 0;
    let mut empty = None;

    for &idx in line {
        match cells[idx] {
            Cell::Empty => {
                if empty.is_some() {
                    // More than one empty cell in the line
                    return None;
                }
                empty = Some(idx);
            }
            c if c == mark => ours += 1,
            // Opponent mark: the line can no longer be completed
            _ => return None,
        }
    }

    if ours == 2 { empty } else { None }
}
