//! Strictly Minimax - tic-tac-toe rules engine and optimal-move solver
//!
//! Given any reachable tic-tac-toe board, this library answers whose turn it
//! is, which moves are legal, what a move produces, whether the game is over,
//! and which move is optimal under perfect play by both sides.
//!
//! # Architecture
//!
//! - **Board model**: plain `Copy` boards with cell counting
//! - **Rules**: player to move, legal actions, transitions, win and draw detection
//! - **Utility**: terminal scoring from X's point of view
//! - **Search**: minimax with alpha-beta pruning and row-major tie-breaking
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, initial_state, minimax, result};
//!
//! # fn example() -> Result<(), strictly_minimax::InvalidAction> {
//! let board = result(&initial_state(), Action::new(1, 1))?;
//! let reply = minimax(&board);
//! assert_eq!(reply, Some(Action::new(0, 0)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod solver_config;

// Crate-level exports - Solver configuration
pub use solver_config::{ConfigError, OutputFormat, SolverConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardError, Cell, DRAW, Evaluation, Game, GameError, InvalidAction, Move,
    O_WINS, Outcome, Player, SearchStats, X_WINS, actions, evaluate, has_line, initial_state,
    is_full, minimax, outcome, player, result, terminal, utility, validate, winner,
};
