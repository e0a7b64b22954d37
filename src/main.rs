//! Strictly Minimax - Unified CLI
//!
//! Thin caller over the solver library: parses a board, runs the search,
//! prints the answer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use strictly_minimax::{
    Board, Game, OutputFormat, SolverConfig, evaluate, initial_state, player, validate,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = SolverConfig::load(&cli.config)?;
    if cli.json {
        config = config.with_output(OutputFormat::Json);
    }

    initialize_tracing(config.log_filter());
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::BestMove { board } => run_best_move(&config, &board),
        Command::Evaluate { board } => run_evaluate(&config, &board),
        Command::Play { board } => run_play(&config, board.as_deref()),
    }
}

/// Print the optimal move for a board
#[instrument(skip(config))]
fn run_best_move(config: &SolverConfig, text: &str) -> Result<()> {
    let board = parse_board(text)?;
    let evaluation = evaluate(&board);

    match config.output() {
        OutputFormat::Json => {
            let report = json!({
                "board": board.to_string(),
                "to_move": player(&board),
                "action": evaluation.action,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_board(config, &board);
            match evaluation.action {
                Some(action) => println!("{} plays {}", player(&board), action),
                None => println!("Game is over, no move to make"),
            }
        }
    }

    Ok(())
}

/// Print the full evaluation of a board
#[instrument(skip(config))]
fn run_evaluate(config: &SolverConfig, text: &str) -> Result<()> {
    let board = parse_board(text)?;
    let evaluation = evaluate(&board);

    match config.output() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        OutputFormat::Text => {
            print_board(config, &board);
            println!("Value:   {}", evaluation.value);
            match evaluation.action {
                Some(action) => println!("Move:    {} plays {}", player(&board), action),
                None => println!("Move:    none (game over)"),
            }
            println!("Nodes:   {}", evaluation.stats.nodes());
            println!("Cutoffs: {}", evaluation.stats.cutoffs());
        }
    }

    Ok(())
}

/// Play the game out with optimal moves for both sides
#[instrument(skip(config))]
fn run_play(config: &SolverConfig, text: Option<&str>) -> Result<()> {
    let start = match text {
        Some(text) => parse_board(text)?,
        None => initial_state(),
    };

    let mut game = Game::from_board(start)?;
    let outcome = game.play_out()?;
    info!(%outcome, "Self-play finished");

    match config.output() {
        OutputFormat::Json => {
            let report = json!({
                "start": start.to_string(),
                "moves": game.history(),
                "final": game.board().to_string(),
                "outcome": outcome,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_board(config, &start);
            for (turn, played) in game.history().iter().enumerate() {
                println!("{:>2}. {}", turn + 1, played);
            }
            print_board(config, game.board());
            println!("{}", outcome);
        }
    }

    Ok(())
}

#[instrument]
fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text.parse()?;
    validate(&board)?;
    debug!(%board, "Board parsed");
    Ok(board)
}

fn print_board(config: &SolverConfig, board: &Board) {
    if *config.show_board() {
        println!("{}\n", board);
    }
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
