//! Sliding-Tile Puzzle Solver Library
//!
//! Provides an immutable n x n board model and an A* solver that finds a
//! shortest move sequence to the goal, or proves none exists by racing the
//! board against its twin.

pub mod board;
pub mod error;
pub mod persistence;
mod solver;

pub use board::{Board, Direction, Tile, BLANK};
pub use error::{BoardError, LoadError};
pub use solver::{Dedup, Heuristic, SearchStats, Solver, SolverOptions};
