//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. The player to move is always derived
//! from the board, never stored alongside it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_line, winner};

use super::phases::Outcome;
use super::{Action, Board, BoardError, Cell, InvalidAction, Player};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// Returns the player who moves next.
///
/// X moves whenever both players have marked the same number of cells.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell as an action, in row-major order.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    Action::all()
        .filter(|action| board.get(action.row(), action.col()) == Some(Cell::Empty))
        .collect()
}

/// Returns the board that results from the player to move marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfBounds`] if the coordinate is off the grid and
/// [`InvalidAction::Occupied`] if the cell is already marked.
#[instrument(level = "trace")]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    match board.get(action.row(), action.col()) {
        None => Err(InvalidAction::OutOfBounds {
            row: action.row(),
            col: action.col(),
        }),
        Some(Cell::Occupied(_)) => Err(InvalidAction::Occupied(action)),
        Some(Cell::Empty) => {
            let mut next = *board;
            next.set(action.row(), action.col(), Cell::Occupied(player(board)));
            Ok(next)
        }
    }
}

/// Returns true once the game is over: someone has won or the board is full.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns how the game ended, or `None` while it is still in progress.
#[instrument]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}

/// Checks that a board can arise from alternating play starting with X.
///
/// # Errors
///
/// Returns a [`BoardError`] if the mark counts break turn order, if both
/// players own a completed line, or if the winner was not the last to move.
#[instrument]
pub fn validate(board: &Board) -> Result<(), BoardError> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    if x_count != o_count && x_count != o_count + 1 {
        warn!(x_count, o_count, "Turn order violated");
        return Err(BoardError::new(format!(
            "Unreachable board: X has {} marks and O has {}",
            x_count, o_count
        )));
    }

    let winners: Vec<Player> = Player::iter().filter(|p| has_line(board, *p)).collect();
    match winners.as_slice() {
        [] => Ok(()),
        [Player::X] if x_count == o_count + 1 => Ok(()),
        [Player::O] if x_count == o_count => Ok(()),
        [single] => {
            warn!(winner = %single, x_count, o_count, "Winner did not move last");
            Err(BoardError::new(format!(
                "Unreachable board: {} won but did not make the last move",
                single
            )))
        }
        _ => {
            warn!("Both players completed a line");
            Err(BoardError::new("Unreachable board: both players have three in a row"))
        }
    }
}
