//! Terminal scoring from X's point of view.

use super::rules::{terminal, winner};
use super::{Board, Player};
use tracing::{instrument, warn};

/// Score of a game X has won.
pub const X_WINS: i8 = 1;
/// Score of a drawn game.
pub const DRAW: i8 = 0;
/// Score of a game O has won.
pub const O_WINS: i8 = -1;

/// Scores a finished board: `1` if X won, `-1` if O won, `0` otherwise.
///
/// Only meaningful on terminal boards. A board still in progress scores `0`
/// and logs a warning.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    if !terminal(board) {
        warn!(%board, "Utility requested for a board still in progress");
    }

    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_values() {
        let x_won: Board = "XXX OO_ ___".parse().unwrap();
        let o_won: Board = "OX_ XO_ X_O".parse().unwrap();
        let draw: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(utility(&x_won), 1);
        assert_eq!(utility(&o_won), -1);
        assert_eq!(utility(&draw), 0);
    }

    #[test]
    fn test_utility_in_progress_scores_zero() {
        assert_eq!(utility(&Board::new()), DRAW);
    }
}
