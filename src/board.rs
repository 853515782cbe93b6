//! Board representation for n x n sliding-tile puzzles.
//!
//! The board is stored as a flat row-major array where each cell contains a
//! tile number (1-based) or 0 for the blank. Boards are immutable values:
//! sliding a tile or building a twin always produces a new board.

use std::fmt::{self, Write};

use crate::error::BoardError;

/// A tile number. `BLANK` marks the empty cell.
pub type Tile = u32;

/// The value stored in the empty cell.
pub const BLANK: Tile = 0;

/// Smallest playable side length.
pub const MIN_DIMENSION: usize = 2;

/// Largest side length whose tile numbers still fit in a `Tile`.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Converts (row, col) coordinates to a linear cell index.
#[inline(always)]
pub const fn cell_to_idx(dimension: usize, row: usize, col: usize) -> usize {
    row * dimension + col
}

/// Converts a linear cell index to (row, col) coordinates.
#[inline(always)]
pub const fn idx_to_cell(dimension: usize, cell_index: usize) -> (usize, usize) {
    (cell_index / dimension, cell_index % dimension)
}

/// Direction the blank travels when a tile slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical expansion order. Search output depends on it for tie-breaking.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the cell the blank moves into, or `None` if it would leave the grid.
    #[inline]
    fn step(self, (row, col): (usize, usize), dimension: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Up => row.checked_sub(1).map(|row| (row, col)),
            Direction::Down => (row + 1 < dimension).then_some((row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|col| (row, col)),
            Direction::Right => (col + 1 < dimension).then_some((row, col + 1)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// One arrangement of tiles on an n x n grid.
///
/// Every value in `0..n*n` appears exactly once; construction rejects
/// anything else. Equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Box<[Tile]>,
    /// Cell index of the blank, kept in sync with `tiles`.
    blank: usize,
}

impl Board {
    /// Builds a board from rows of tiles, copying the input.
    ///
    /// ```
    /// use npuzzle::Board;
    ///
    /// let board = Board::new(&[[1, 2], [3, 0]]).unwrap();
    /// assert!(board.is_goal());
    /// ```
    pub fn new<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if dimension < MIN_DIMENSION {
            return Err(BoardError::TooSmall { dimension });
        }

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != dimension {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from a flat row-major tile list.
    pub fn from_tiles(dimension: usize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if dimension < MIN_DIMENSION {
            return Err(BoardError::TooSmall { dimension });
        }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::TooLarge { dimension });
        }

        let cell_count = dimension * dimension;
        if tiles.len() != cell_count {
            return Err(BoardError::WrongTileCount {
                expected: cell_count,
                found: tiles.len(),
            });
        }

        let max = (cell_count - 1) as Tile;
        let mut seen = vec![false; cell_count];
        let mut blank = 0;
        for (cell_index, &tile) in tiles.iter().enumerate() {
            if tile > max {
                return Err(BoardError::OutOfRange { tile, max });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(BoardError::Duplicate { tile });
            }
            if tile == BLANK {
                blank = cell_index;
            }
        }

        Ok(Self {
            dimension,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// The solved board: tiles 1..n*n-1 in row-major order, blank last.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        if dimension > MAX_DIMENSION {
            return Err(BoardError::TooLarge { dimension });
        }
        let cell_count = dimension.saturating_mul(dimension);
        let tiles = (1..cell_count as Tile).chain([BLANK]).collect();
        Self::from_tiles(dimension, tiles)
    }

    /// Board side length.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Tile at (row, col). Panics if the cell is outside the board.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        assert!(
            row < self.dimension && col < self.dimension,
            "cell ({row}, {col}) is outside a {0}x{0} board",
            self.dimension
        );
        self.tiles[cell_to_idx(self.dimension, row, col)]
    }

    /// (row, col) of the blank.
    #[inline]
    pub fn blank(&self) -> (usize, usize) {
        idx_to_cell(self.dimension, self.blank)
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.dimension)
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(cell_index, &tile)| tile != BLANK && tile as usize != cell_index + 1)
            .count()
    }

    /// Sum of the grid distances from each non-blank tile to its goal cell.
    pub fn manhattan(&self) -> usize {
        let n = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(cell_index, &tile)| {
                let (row, col) = idx_to_cell(n, cell_index);
                let (goal_row, goal_col) = idx_to_cell(n, tile as usize - 1);
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            })
            .sum()
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Swaps one fixed pair of adjacent non-blank tiles.
    ///
    /// Uses row 0 columns 0-1, or row 1 columns 0-1 when the blank sits in
    /// the first pair. The swap flips permutation parity, so exactly one of
    /// a board and its twin can reach the goal.
    pub fn twin(&self) -> Board {
        let n = self.dimension;
        let (first, second) = if self.tiles[0] == BLANK || self.tiles[1] == BLANK {
            (cell_to_idx(n, 1, 0), cell_to_idx(n, 1, 1))
        } else {
            (cell_to_idx(n, 0, 0), cell_to_idx(n, 0, 1))
        };
        self.with_swapped(first, second)
    }

    /// Moves the blank one cell in `direction`, or `None` at the edge.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (row, col) = direction.step(self.blank(), self.dimension)?;
        Some(self.with_swapped(
            self.blank,
            cell_to_idx(self.dimension, row, col),
        ))
    }

    /// Boards one move away, in the order up, down, left, right.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.slide(direction))
    }

    /// Like [`Board::neighbors`], paired with the direction the blank moved.
    pub fn successors(&self) -> impl Iterator<Item = (Direction, Board)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.slide(direction).map(|board| (direction, board)))
    }

    fn with_swapped(&self, first: usize, second: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);

        let blank = if self.blank == first {
            second
        } else if self.blank == second {
            first
        } else {
            self.blank
        };

        Board {
            dimension: self.dimension,
            tiles,
            blank,
        }
    }
}

/// Renders the dimension on the first line, then one line per row with
/// tiles right-aligned to the widest tile number.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let largest = self.dimension * self.dimension - 1;
        let width = largest.to_string().len();

        write!(f, "{}", self.dimension)?;
        for row in self.rows() {
            f.write_char('\n')?;
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{tile:>width$}")?;
            }
        }
        Ok(())
    }
}
