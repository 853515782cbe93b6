//! Sliding-Tile Puzzle Solver
//!
//! Reads an n x n sliding-tile puzzle from a file and prints a shortest
//! sequence of boards leading to the goal, or reports that the puzzle has
//! no solution.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use npuzzle::{persistence, Board, Dedup, Heuristic, SearchStats, Solver, SolverOptions};

/// Solves n x n sliding-tile puzzles optimally.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and print the shortest solution.
    Solve {
        /// Puzzle file: the dimension, then the tiles row by row (0 is the blank).
        file: PathBuf,
        /// Estimate used to order the search.
        #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
        heuristic: HeuristicArg,
        /// How revisited boards are detected.
        #[arg(long, value_enum, default_value_t = DedupArg::Ancestors)]
        dedup: DedupArg,
        /// Write the report to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print search counters after the report.
        #[arg(long)]
        stats: bool,
    },
    /// Show heuristics, twin, and neighbors of a puzzle file.
    Inspect {
        /// Puzzle file to inspect.
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Hamming,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Hamming => Heuristic::Hamming,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DedupArg {
    /// Skip only boards already on the current path.
    Ancestors,
    /// Never expand the same board twice.
    Closed,
}

impl From<DedupArg> for Dedup {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Ancestors => Dedup::Ancestors,
            DedupArg::Closed => Dedup::Closed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            file,
            heuristic,
            dedup,
            output,
            stats,
        } => {
            let options = SolverOptions {
                heuristic: heuristic.into(),
                dedup: dedup.into(),
            };
            run_solve(&file, options, output.as_deref(), stats)
        }
        Command::Inspect { file } => run_inspect(&file),
    }
}

/// Loads a puzzle, printing the error on failure.
fn load_board(file: &Path) -> Option<Board> {
    match persistence::load(file) {
        Ok(board) => Some(board),
        Err(e) => {
            eprintln!("Failed to load puzzle: {}", e);
            None
        }
    }
}

/// Solves the puzzle and prints or saves the report.
fn run_solve(
    file: &Path,
    options: SolverOptions,
    output: Option<&Path>,
    stats: bool,
) -> ExitCode {
    let Some(initial) = load_board(file) else {
        return ExitCode::FAILURE;
    };

    let solver = Solver::with_options(&initial, options);

    match output {
        Some(path) => {
            if let Err(e) = persistence::save_report(path, &initial, &solver) {
                eprintln!("Failed to save report: {}", e);
                return ExitCode::FAILURE;
            }
            match solver.moves() {
                Some(moves) => println!("Solved in {} moves", moves),
                None => println!("No solution possible"),
            }
            println!("Wrote {}", path.display());
        }
        None => print!("{}", persistence::format_report(&initial, &solver)),
    }

    if stats {
        println!();
        println!("{}", format_stats("board", solver.stats()));
        println!("{}", format_stats("twin", solver.twin_stats()));
    }

    ExitCode::SUCCESS
}

/// Prints board measurements without searching.
fn run_inspect(file: &Path) -> ExitCode {
    let Some(board) = load_board(file) else {
        return ExitCode::FAILURE;
    };

    println!("{}", board);
    println!();
    println!("hamming:   {}", board.hamming());
    println!("manhattan: {}", board.manhattan());
    println!("goal:      {}", board.is_goal());
    println!();
    println!("twin:\n{}", board.twin());
    for (direction, neighbor) in board.successors() {
        println!();
        println!("blank {}:\n{}", direction, neighbor);
    }

    ExitCode::SUCCESS
}

fn format_stats(label: &str, stats: SearchStats) -> String {
    format!(
        "{:<5} expanded {}, generated {}, peak frontier {}",
        label, stats.expanded, stats.generated, stats.max_frontier
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_arguments() {
        let cli = Cli::try_parse_from([
            "npuzzle",
            "solve",
            "puzzle04.txt",
            "--heuristic",
            "hamming",
            "--dedup",
            "closed",
        ])
        .unwrap();

        let Command::Solve {
            file,
            heuristic,
            dedup,
            output,
            stats,
        } = cli.command
        else {
            panic!("expected solve subcommand");
        };
        assert_eq!(file, PathBuf::from("puzzle04.txt"));
        assert_eq!(Heuristic::from(heuristic), Heuristic::Hamming);
        assert_eq!(Dedup::from(dedup), Dedup::Closed);
        assert!(output.is_none());
        assert!(!stats);
    }

    #[test]
    fn test_stats_line() {
        let stats = SearchStats {
            expanded: 3,
            generated: 9,
            max_frontier: 6,
        };
        assert_eq!(
            format_stats("twin", stats),
            "twin  expanded 3, generated 9, peak frontier 6"
        );
    }
}
