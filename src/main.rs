//! Gomoku engine CLI
//!
//! Reads a board in text form and prints the agent's move as `row col`,
//! or `none` when no candidate exists.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::config::{DEFAULT_BOARD_SIZE, DEFAULT_DEPTH, DEFAULT_WIN_LENGTH};
use gomoku::rules::winner;
use gomoku::{Agent, Board, GameConfig, SearchConfig, Stone, Symbols};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Pick a Gomoku move with minimax search")]
struct Args {
    /// Board file, one row per line (`-` reads stdin)
    #[arg(short, long, default_value = "-")]
    board: PathBuf,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
    depth: i8,

    /// Use plain minimax instead of alpha-beta
    #[arg(long)]
    no_pruning: bool,

    /// Search root candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// Symbol the agent plays
    #[arg(short, long, default_value_t = 'X')]
    agent: char,

    /// Symbol for empty cells
    #[arg(long, default_value_t = '.')]
    blank: char,

    /// Symbol for black stones
    #[arg(long, default_value_t = 'X')]
    black: char,

    /// Symbol for white stones
    #[arg(long, default_value_t = 'O')]
    white: char,
}

fn read_board_text(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read board from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let symbols = Symbols {
        blank: args.blank,
        black: args.black,
        white: args.white,
    };
    let game = GameConfig::new(args.size, args.win_length).with_symbols(symbols);
    let search = SearchConfig {
        depth: args.depth,
        pruning: !args.no_pruning,
        parallel: args.parallel,
    };

    let stone = match symbols.stone_for(args.agent) {
        Some(stone) if stone != Stone::Empty => stone,
        _ => anyhow::bail!(
            "agent symbol {:?} must be the black ({:?}) or white ({:?}) symbol",
            args.agent,
            symbols.black,
            symbols.white
        ),
    };

    let text = read_board_text(&args.board)?;
    let board = Board::parse(&text, &game).context("invalid board")?;

    if let Some(won) = winner(&board, game.win_length) {
        println!("finished {}", symbols.symbol_for(won));
        return Ok(());
    }

    let mut agent = Agent::new(game, search, stone, stone.opponent())?;
    let result = agent.play_with_stats(&board)?;
    info!(
        search_type = ?result.search_type,
        score = result.score,
        nodes = result.nodes,
        time_ms = result.time_ms,
        "search finished"
    );

    match result.best_move {
        Some(pos) => println!("{} {}", pos.row, pos.col),
        None => println!("none"),
    }
    Ok(())
}
