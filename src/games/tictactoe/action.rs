//! Action types for tic-tac-toe.
//!
//! An action names a cell; whether it is legal depends on the board it is
//! applied to.

use super::Player;
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate naming a candidate move.
///
/// Actions order row-major: by row, then by column. The search relies on this
/// ordering to break ties between equally good moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Row of the targeted cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the targeted cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index (0-8), or `None` if the coordinate is off the board.
    pub fn index(&self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    /// Creates an action from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..9).map(|index| Self::new(index / 3, index % 3))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A played move: who placed a mark, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player marked.
    pub action: Action,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.action)
    }
}

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinate lies outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The targeted cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Action),
}

impl std::error::Error for InvalidAction {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_row_major() {
        let mut actions: Vec<_> = Action::all().collect();
        actions.reverse();
        actions.sort();
        assert_eq!(actions, Action::all().collect::<Vec<_>>());
        assert!(Action::new(0, 2) < Action::new(1, 0));
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            assert_eq!(Action::from_index(index).and_then(|a| a.index()), Some(index));
        }
        assert_eq!(Action::from_index(9), None);
        assert_eq!(Action::new(0, 3).index(), None);
    }
}
