//! Game driver for tic-tac-toe.
//!
//! Wraps the rules engine with a move history so a caller can play a game
//! one action at a time, or let the search play it out.

use super::action::{InvalidAction, Move};
use super::phases::Outcome;
use super::rules::{outcome, player, result, terminal, validate};
use super::search::minimax;
use super::{Action, Board, BoardError, Player};
use tracing::{debug, info, instrument};

/// Error returned when a move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The rules rejected the action.
    #[display("Invalid action: {}", _0)]
    #[from]
    InvalidAction(InvalidAction),

    /// Play stopped before the board reached a terminal position.
    #[display("Game stopped before it finished")]
    Unfinished,
}

impl std::error::Error for GameError {}

/// A game in progress, with its move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Resumes play from an existing board. The history starts empty.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the board cannot arise from legal play.
    #[instrument]
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        validate(&board)?;
        Ok(Self {
            board,
            history: Vec::new(),
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played through this driver.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        (!terminal(&self.board)).then(|| player(&self.board))
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    /// Plays `action` for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] on a finished board and
    /// [`GameError::InvalidAction`] if the rules reject the action.
    #[instrument(skip(self), fields(player = %player(&self.board)))]
    pub fn play(&mut self, action: Action) -> Result<Move, GameError> {
        if terminal(&self.board) {
            return Err(GameError::GameOver);
        }

        let mover = player(&self.board);
        self.board = result(&self.board, action)?;
        let played = Move::new(mover, action);
        self.history.push(played);

        debug!(%played, "Move played");
        Ok(played)
    }

    /// Plays the move the search picks for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] on a finished board.
    #[instrument(skip(self))]
    pub fn play_optimal(&mut self) -> Result<Move, GameError> {
        let action = minimax(&self.board).ok_or(GameError::GameOver)?;
        self.play(action)
    }

    /// Lets the search play both sides until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Game::play`].
    #[instrument(skip(self))]
    pub fn play_out(&mut self) -> Result<Outcome, GameError> {
        while let Some(action) = minimax(&self.board) {
            self.play(action)?;
        }

        let finished = self.outcome().ok_or(GameError::Unfinished)?;
        info!(outcome = %finished, moves = self.history.len(), "Game finished");
        Ok(finished)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
