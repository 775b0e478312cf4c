//! Command-line interface for the tic-tac-toe engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tictactoe::{Board, Error, Heuristic, Mark, Settings};

/// Tic-tac-toe on any grid, with a minimax AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "N×M tic-tac-toe with an alpha-beta AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML settings file; command-line values override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the AI play against itself
    Selfplay {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of rounds; the opening mark alternates between rounds
        #[arg(long, default_value = "1")]
        rounds: u32,
    },

    /// Print the AI's move for a position
    Suggest {
        /// Board rows of X, O and '.', separated by '/' (e.g. "X../.O./...")
        #[arg(long)]
        board: String,

        /// Mark to move
        #[arg(long, value_parser = parse_mark)]
        mark: Mark,

        #[command(flatten)]
        grid: GridArgs,
    },
}

/// Overrides for the settings file
#[derive(Args, Debug, Default)]
pub struct GridArgs {
    /// Columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Run length needed to win
    #[arg(long)]
    pub win_length: Option<usize>,

    /// Search depth (default: chosen from the grid size)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Evaluator used at the depth cut-off
    #[arg(long, value_enum)]
    pub heuristic: Option<Heuristic>,
}

impl GridArgs {
    /// Apply the overrides that were given
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.grid_width = width;
        }
        if let Some(height) = self.height {
            settings.grid_height = height;
        }
        if let Some(win_length) = self.win_length {
            settings.win_length = win_length;
        }
        if self.depth.is_some() {
            settings.depth = self.depth;
        }
        if let Some(heuristic) = self.heuristic {
            settings.heuristic = heuristic;
        }
    }
}

/// Parse `text` for `suggest` and settle the settings on its size.
///
/// Size flags must agree with the board text. The win length comes from the
/// flags or the settings and is validated like any other setting.
pub fn board_for_suggest(text: &str, grid: &GridArgs, settings: &mut Settings) -> tictactoe::Result<Board> {
    let board: Board = text.parse()?;
    let (width, height) = (board.width(), board.height());

    if grid.width.is_some_and(|w| w != width) || grid.height.is_some_and(|h| h != height) {
        return Err(Error::BoardSizeMismatch {
            expected_width: grid.width.unwrap_or(width),
            expected_height: grid.height.unwrap_or(height),
            width,
            height,
        });
    }

    grid.apply_to(settings);
    settings.grid_width = width;
    settings.grid_height = height;
    settings.validate()?;
    Ok(board.with_win_length(settings.win_length))
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    match Mark::from_symbol(s.chars().next().unwrap_or(' ')) {
        Some(mark) if s.chars().count() == 1 && !mark.is_empty() => Ok(mark),
        _ => Err(format!("expected X or O, got '{s}'")),
    }
}
