//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};

/// Strictly Minimax - optimal tic-tac-toe moves by alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe solver using minimax with alpha-beta pruning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to solver configuration file
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Print results as JSON (overrides the configured output format)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `_` for empty.
/// Spaces, `/` and `|` may separate rows, e.g. `"XX_/OO_/___"`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board to search
        #[arg(short, long)]
        board: String,
    },

    /// Print the game value, optimal move and search counters
    Evaluate {
        /// Board to search
        #[arg(short, long)]
        board: String,
    },

    /// Let the solver play both sides to the end of the game
    Play {
        /// Starting board (empty board if omitted)
        #[arg(short, long)]
        board: Option<String>,
    },
}
