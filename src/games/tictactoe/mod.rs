//! Tic-tac-toe rules engine and solver.

mod action;
mod game;
mod phases;
mod rules;
mod search;
mod types;
mod utility;

pub use action::{Action, InvalidAction, Move};
pub use game::{Game, GameError};
pub use phases::Outcome;
pub use rules::{actions, has_line, is_full, outcome, player, result, terminal, validate, winner};
pub use search::{Evaluation, SearchStats, evaluate, minimax};
pub use types::{Board, BoardError, Cell, Player, initial_state};
pub use utility::{DRAW, O_WINS, X_WINS, utility};
