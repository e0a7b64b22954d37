//! Full-board detection for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}
