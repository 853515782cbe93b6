//! Error types for board construction and puzzle file loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Tile;

/// Rejected board layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Boards must be at least 2x2.
    #[error("board dimension {dimension} is too small (minimum is 2)")]
    TooSmall { dimension: usize },
    /// Tile numbers would not fit in a `Tile`.
    #[error("board dimension {dimension} is too large")]
    TooLarge { dimension: usize },
    /// A row does not have `dimension` tiles.
    #[error("row {row} has {len} tiles, expected {dimension}")]
    RaggedRow {
        row: usize,
        len: usize,
        dimension: usize,
    },
    /// The flat tile list is not `dimension * dimension` long.
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[error("tile {tile} is out of range (largest allowed is {max})")]
    OutOfRange { tile: Tile, max: Tile },
    #[error("tile {tile} appears more than once")]
    Duplicate { tile: Tile },
}

/// Failures while reading a puzzle file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("puzzle file is empty")]
    MissingDimension,
    #[error("invalid integer {token:?}")]
    InvalidToken { token: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}
