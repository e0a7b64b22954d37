//! Adversarial search for tic-tac-toe.
//!
//! Minimax with alpha-beta pruning over the full remaining game tree. X
//! maximizes [`utility`], O minimizes it. Every node owns its own board copy
//! and its own bounds; nothing is shared between sibling branches.
//!
//! Successors are visited in the row-major order of [`actions`], so among
//! equally valued moves the first one in that order is chosen.

use super::rules::{actions, player, result, terminal};
use super::utility::utility;
use super::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Lower bound below every utility.
const NEG_INFINITY: i8 = i8::MIN;
/// Upper bound above every utility.
const POS_INFINITY: i8 = i8::MAX;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

impl SearchStats {
    /// Number of positions evaluated below the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Number of times a bound let the search skip remaining siblings.
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }
}

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Best move for the player to move, `None` on a finished board.
    pub action: Option<Action>,
    /// Game value under optimal play by both sides.
    pub value: i8,
    /// Search counters.
    pub stats: SearchStats,
}

/// Returns the optimal action for the player to move, or `None` if the game is over.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn minimax(board: &Board) -> Option<Action> {
    evaluate(board).action
}

/// Searches `board` and reports the chosen action, the game value and counters.
///
/// On a terminal board no search runs: the action is `None` and the value is
/// the board's utility.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn evaluate(board: &Board) -> Evaluation {
    let mut stats = SearchStats::default();

    if terminal(board) {
        debug!("Board is terminal, no move to search");
        return Evaluation {
            action: None,
            value: utility(board),
            stats,
        };
    }

    let mut alpha = NEG_INFINITY;
    let mut beta = POS_INFINITY;
    let mut best: Option<(Action, i8)> = None;

    match player(board) {
        Player::X => {
            for (action, next) in successors(*board) {
                let value = min_value(next, alpha, beta, &mut stats);
                alpha = alpha.max(value);
                if best.is_none_or(|(_, best_value)| value > best_value) {
                    best = Some((action, value));
                }
            }
        }
        Player::O => {
            for (action, next) in successors(*board) {
                let value = max_value(next, alpha, beta, &mut stats);
                beta = beta.min(value);
                if best.is_none_or(|(_, best_value)| value < best_value) {
                    best = Some((action, value));
                }
            }
        }
    }

    let (action, value) = match best {
        Some((action, value)) => (Some(action), value),
        None => (None, utility(board)),
    };

    debug!(
        action = ?action,
        value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    Evaluation {
        action,
        value,
        stats,
    }
}

/// Value of `state` for the maximizing player, X.
#[instrument(level = "trace", skip(stats))]
fn max_value(state: Board, mut alpha: i8, beta: i8, stats: &mut SearchStats) -> i8 {
    stats.nodes += 1;
    if terminal(&state) {
        return utility(&state);
    }

    let mut v = NEG_INFINITY;
    for (_, next) in successors(state) {
        v = v.max(min_value(next, alpha, beta, stats));
        if v >= beta {
            stats.cutoffs += 1;
            return v;
        }
        alpha = alpha.max(v);
    }
    v
}

/// Value of `state` for the minimizing player, O.
#[instrument(level = "trace", skip(stats))]
fn min_value(state: Board, alpha: i8, mut beta: i8, stats: &mut SearchStats) -> i8 {
    stats.nodes += 1;
    if terminal(&state) {
        return utility(&state);
    }

    let mut v = POS_INFINITY;
    for (_, next) in successors(state) {
        v = v.min(max_value(next, alpha, beta, stats));
        if v <= alpha {
            stats.cutoffs += 1;
            return v;
        }
        beta = beta.min(v);
    }
    v
}

/// Legal actions of `state` paired with the boards they produce.
fn successors(state: Board) -> impl Iterator<Item = (Action, Board)> {
    actions(&state)
        .into_iter()
        .filter_map(move |action| match result(&state, action) {
            Ok(next) => Some((action, next)),
            Err(e) => {
                error!(%action, error = %e, "Enumerated action rejected by rules");
                None
            }
        })
}
