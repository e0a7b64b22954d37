//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// Winning lines as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Iterates over the owner of every completed line, in check order.
fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    let cells = board.cells();
    LINES.iter().filter_map(move |&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => Some(player),
        _ => None,
    })
}

/// Returns the player owning a completed row, column or diagonal.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// completed line decides.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

/// Returns true if `player` owns at least one completed line.
pub fn has_line(board: &Board, player: Player) -> bool {
    completed_lines(board).any(|owner| owner == player)
}
