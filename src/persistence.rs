//! File I/O for puzzle boards and solution reports.
//!
//! Puzzle file format (whitespace separated integers):
//! - the dimension `n`
//! - `n * n` tiles in row-major order, 0 for the blank
//!
//! Line breaks carry no meaning, so the conventional layout of one row per
//! line parses the same as everything on a single line.

use std::fs;
use std::path::Path;

use crate::board::{Board, Tile};
use crate::error::LoadError;
use crate::solver::Solver;

/// Parses a board from puzzle file text.
pub fn parse(text: &str) -> Result<Board, LoadError> {
    let mut tokens = text.split_whitespace();

    let dimension_token = tokens.next().ok_or(LoadError::MissingDimension)?;
    let dimension: usize = dimension_token
        .parse()
        .map_err(|_| LoadError::InvalidToken {
            token: dimension_token.to_string(),
        })?;

    let tiles = tokens
        .map(|token| {
            token.parse::<Tile>().map_err(|_| LoadError::InvalidToken {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<Tile>, LoadError>>()?;

    Ok(Board::from_tiles(dimension, tiles)?)
}

/// Reads and parses a puzzle file.
pub fn load(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Formats the outcome of a solve as a human-readable report.
///
/// Lists every board of the solution, initial to goal, separated by blank
/// lines.
pub fn format_report(initial: &Board, solver: &Solver) -> String {
    let mut output = format!("Initial board:\n{initial}\n\n");

    match solver.solution() {
        None => output.push_str("No solution possible\n"),
        Some(boards) => {
            output.push_str(&format!("Minimum number of moves = {}\n", boards.len() - 1));
            for board in boards {
                output.push_str(&format!("\n{board}\n"));
            }
        }
    }

    output
}

/// Writes the report for a solve to `path`.
pub fn save_report(
    path: impl AsRef<Path>,
    initial: &Board,
    solver: &Solver,
) -> std::io::Result<()> {
    fs::write(path, format_report(initial, solver))
}
